//! Badge visual configuration.
//!
//! All of the badge's tunable constants live in one place: [`BadgeStyle`].
//! The defaults reproduce the classic unread-count look — a red-orange
//! rounded bubble with white 12 sp text.

use badgekit_host::Color;

use crate::position::BadgePosition;

/// Default margin from the pinned corner, in density-independent units.
pub const DEFAULT_MARGIN_DIP: f32 = 5.0;

/// Default left/right text padding, in density-independent units.
pub const DEFAULT_PADDING_DIP: f32 = 5.0;

/// Default corner radius of the bubble, in density-independent units.
pub const DEFAULT_CORNER_RADIUS_DIP: f32 = 8.0;

/// Default text size, in scale-independent units.
pub const DEFAULT_TEXT_SIZE_SP: f32 = 12.0;

/// Visual configuration for a badge.
///
/// # Example
///
/// ```
/// use badgekit::{BadgePosition, BadgeStyle};
/// use badgekit_host::Color;
///
/// let style = BadgeStyle::default()
///     .with_position(BadgePosition::BottomLeft)
///     .with_background_color(Color::from_rgb8(0x00, 0x7A, 0xFF));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    /// Which corner of the host the badge sits in (or its center).
    pub position: BadgePosition,
    /// Horizontal offset from the pinned corner, in device pixels.
    pub margin_h: f32,
    /// Vertical offset from the pinned corner, in device pixels.
    pub margin_v: f32,
    /// Bubble fill color.
    pub background_color: Color,
    /// Text color.
    pub text_color: Color,
    /// Text size in scale-independent units.
    pub text_size_sp: f32,
    /// Bubble corner radius in density-independent units.
    pub corner_radius_dip: f32,
    /// Left/right text padding in density-independent units.
    pub padding_dip: f32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            position: BadgePosition::TopRight,
            margin_h: DEFAULT_MARGIN_DIP,
            margin_v: DEFAULT_MARGIN_DIP,
            // The classic unread-bubble red-orange.
            background_color: Color::from_rgb8(0xFF, 0x3B, 0x30),
            text_color: Color::WHITE,
            text_size_sp: DEFAULT_TEXT_SIZE_SP,
            corner_radius_dip: DEFAULT_CORNER_RADIUS_DIP,
            padding_dip: DEFAULT_PADDING_DIP,
        }
    }
}

impl BadgeStyle {
    /// Set the badge position.
    pub fn with_position(mut self, position: BadgePosition) -> Self {
        self.position = position;
        self
    }

    /// Set a uniform corner margin, in device pixels.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin_h = margin;
        self.margin_v = margin;
        self
    }

    /// Set per-axis corner margins, in device pixels.
    pub fn with_margins(mut self, horizontal: f32, vertical: f32) -> Self {
        self.margin_h = horizontal;
        self.margin_v = vertical;
        self
    }

    /// Set the bubble fill color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the text size in scale-independent units.
    pub fn with_text_size(mut self, sp: f32) -> Self {
        self.text_size_sp = sp;
        self
    }

    /// Set the bubble corner radius in density-independent units.
    pub fn with_corner_radius(mut self, dip: f32) -> Self {
        self.corner_radius_dip = dip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = BadgeStyle::default();
        assert_eq!(style.position, BadgePosition::TopRight);
        assert_eq!(style.margin_h, 5.0);
        assert_eq!(style.margin_v, 5.0);
        assert_eq!(style.background_color, Color::from_hex("#FF3B30").unwrap());
        assert_eq!(style.text_color, Color::WHITE);
        assert_eq!(style.text_size_sp, 12.0);
        assert_eq!(style.corner_radius_dip, 8.0);
        assert_eq!(style.padding_dip, 5.0);
    }

    #[test]
    fn test_builders() {
        let style = BadgeStyle::default()
            .with_position(BadgePosition::Center)
            .with_margins(10.0, 20.0)
            .with_text_size(16.0);
        assert_eq!(style.position, BadgePosition::Center);
        assert_eq!(style.margin_h, 10.0);
        assert_eq!(style.margin_v, 20.0);
        assert_eq!(style.text_size_sp, 16.0);
    }
}
