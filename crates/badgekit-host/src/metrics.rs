//! Display metrics and unit conversion.
//!
//! Widgets express lengths in density-independent units (dip) and text sizes
//! in scale-independent units (sp). The host supplies a [`DisplayMetrics`]
//! describing the device, and conversions to device pixels happen here.

/// Device display metrics used to translate abstract units into pixels.
///
/// # Example
///
/// ```
/// use badgekit_host::DisplayMetrics;
///
/// let metrics = DisplayMetrics::new(2.0);
/// assert_eq!(metrics.dip_to_px(5.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent unit.
    density: f32,
    /// Pixels per scale-independent unit (density adjusted by the user's
    /// font-size preference).
    font_scale: f32,
}

impl Default for DisplayMetrics {
    /// Identity metrics: one pixel per unit. Suitable for headless use
    /// and tests.
    fn default() -> Self {
        Self {
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl DisplayMetrics {
    /// Create metrics for a device with the given density. The font scale
    /// starts equal to the density.
    pub fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: density,
        }
    }

    /// Set a font scale that differs from the density (user preference for
    /// larger or smaller text).
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }

    /// Pixels per density-independent unit.
    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Pixels per scale-independent unit.
    #[inline]
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Convert density-independent units to device pixels.
    #[inline]
    pub fn dip_to_px(&self, dip: f32) -> f32 {
        dip * self.density
    }

    /// Convert density-independent units to whole device pixels,
    /// truncating toward zero.
    #[inline]
    pub fn dip_to_px_i32(&self, dip: f32) -> i32 {
        self.dip_to_px(dip) as i32
    }

    /// Convert scale-independent units to device pixels.
    #[inline]
    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.font_scale
    }
}
