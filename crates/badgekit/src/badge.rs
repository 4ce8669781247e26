//! The badge overlay widget.
//!
//! [`BadgeOverlay`] renders a small rounded bubble with a number or short
//! text over a corner (or the center) of a host view. The widget owns its
//! state — text, style, shown flag — and materializes into a host view
//! when shown or attached; all host interaction goes through the
//! [`ViewOps`]/[`ContainerOps`] capability traits.
//!
//! # Example
//!
//! ```
//! use badgekit::BadgeOverlay;
//! use badgekit_host::{ContainerOps, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.create_container();
//! let target = scene.create_view();
//! scene.add_child(root, target).unwrap();
//!
//! let mut badge = BadgeOverlay::new();
//! badge.attach(&mut scene, target).unwrap();
//! badge.increment(3);
//! badge.show(&mut scene).unwrap();
//! assert!(badge.is_shown());
//! ```

use badgekit_host::{
    Background, Color, ContainerOps, DisplayMetrics, FadeAnimation, HostResult, LayoutParams,
    Margins, TextStyle, ViewId,
};

use crate::position::BadgePosition;
use crate::style::{BadgeStyle, DEFAULT_MARGIN_DIP};

/// A small badge overlaid on a host view, typically showing an unread count.
///
/// # Lifecycle
///
/// A badge starts detached. [`attach`](crate::BadgeOverlay::attach) wraps a
/// target view so the badge floats over it; a badge that is never attached
/// can still be shown standalone. The badge holds no destructor logic — it
/// is torn down with the host's view tree.
///
/// # Units
///
/// Margins are device pixels unless the use-dip flag is set, in which case
/// the margin setters convert through the host's display metrics.
/// [`set_use_dip`](crate::BadgeOverlay::set_use_dip) must therefore be
/// called before the margin setters.
pub struct BadgeOverlay {
    /// Displayed text.
    pub(crate) text: String,

    /// Visual configuration.
    pub(crate) style: BadgeStyle,

    /// Whether the text is rendered bold.
    pub(crate) bold: bool,

    /// Whether margin setters convert their inputs from dip to pixels.
    pub(crate) use_dip: bool,

    /// Whether explicit margins have replaced the 5 dip defaults.
    pub(crate) margins_customized: bool,

    /// Logical shown state. Set optimistically when show/hide is called,
    /// regardless of any fade still in flight.
    pub(crate) shown: bool,

    /// Metrics used for unit conversion; refreshed from the host on attach.
    pub(crate) metrics: DisplayMetrics,

    /// Lazily built bubble backdrop.
    pub(crate) background: Option<Background>,

    /// The badge's own view in the host, once materialized.
    pub(crate) view: Option<ViewId>,

    /// The wrapper container inserted between the target and its parent.
    pub(crate) wrapper: Option<ViewId>,

    /// The view the badge floats over.
    pub(crate) target: Option<ViewId>,
}

impl BadgeOverlay {
    /// Create a detached badge with the default style and identity
    /// display metrics.
    pub fn new() -> Self {
        Self::with_metrics(DisplayMetrics::default())
    }

    /// Create a detached badge that converts units with the given metrics.
    pub fn with_metrics(metrics: DisplayMetrics) -> Self {
        let mut style = BadgeStyle::default();
        style.margin_h = metrics.dip_to_px(DEFAULT_MARGIN_DIP);
        style.margin_v = style.margin_h;

        Self {
            text: String::new(),
            style,
            bold: false,
            use_dip: false,
            margins_customized: false,
            shown: false,
            metrics,
            background: None,
            view: None,
            wrapper: None,
            target: None,
        }
    }

    /// Create a badge with an explicit style. The style's margins are
    /// taken as device pixels.
    pub fn with_style(style: BadgeStyle) -> Self {
        Self {
            style,
            margins_customized: true,
            ..Self::new()
        }
    }

    /// Set the initial text (builder form).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the displayed text. Reaches the host view on the next show.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Add `offset` to the numeric value of the badge text.
    ///
    /// Text that does not parse as an integer (including empty text)
    /// counts as 0. The new value is stored as the badge text and
    /// returned; it reaches the host view on the next show.
    pub fn increment(&mut self, offset: i32) -> i32 {
        let current = self.text.parse::<i32>().unwrap_or(0);
        let value = current.saturating_add(offset);
        self.text = value.to_string();
        value
    }

    /// Subtract `offset` from the numeric value of the badge text.
    ///
    /// Equivalent to `increment(-offset)`.
    pub fn decrement(&mut self, offset: i32) -> i32 {
        self.increment(offset.saturating_neg())
    }

    // =========================================================================
    // Style Accessors
    // =========================================================================

    /// Get the visual configuration.
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Get the badge position.
    pub fn position(&self) -> BadgePosition {
        self.style.position
    }

    /// Set the badge position.
    pub fn set_position(&mut self, position: BadgePosition) -> &mut Self {
        self.style.position = position;
        self
    }

    /// Horizontal offset from the pinned corner, in device pixels.
    pub fn horizontal_margin(&self) -> f32 {
        self.style.margin_h
    }

    /// Vertical offset from the pinned corner, in device pixels.
    pub fn vertical_margin(&self) -> f32 {
        self.style.margin_v
    }

    /// Set a uniform corner margin. Interpreted as dip when the use-dip
    /// flag is set, device pixels otherwise.
    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.set_margins(margin, margin)
    }

    /// Set per-axis corner margins. Interpreted as dip when the use-dip
    /// flag is set, device pixels otherwise.
    pub fn set_margins(&mut self, horizontal: f32, vertical: f32) -> &mut Self {
        let (h, v) = if self.use_dip {
            (
                self.metrics.dip_to_px(horizontal),
                self.metrics.dip_to_px(vertical),
            )
        } else {
            (horizontal, vertical)
        };
        self.style.margin_h = h;
        self.style.margin_v = v;
        self.margins_customized = true;
        self
    }

    /// Get the bubble fill color.
    pub fn background_color(&self) -> Color {
        self.style.background_color
    }

    /// Set the bubble fill color, rebuilding the backdrop immediately.
    pub fn set_background_color(&mut self, color: Color) -> &mut Self {
        self.style.background_color = color;
        self.background = Some(self.default_background());
        self
    }

    /// Get the text size in scale-independent units.
    pub fn text_size(&self) -> f32 {
        self.style.text_size_sp
    }

    /// Set the text size in scale-independent units.
    pub fn set_text_size(&mut self, sp: f32) -> &mut Self {
        self.style.text_size_sp = sp;
        self
    }

    /// Whether the text is rendered bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Set whether the text is rendered bold.
    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    /// Whether margin setters convert their inputs from dip.
    pub fn uses_dip(&self) -> bool {
        self.use_dip
    }

    /// Set whether margin setters convert their inputs from dip to device
    /// pixels. Must be called before [`set_margin`](Self::set_margin) or
    /// [`set_margins`](Self::set_margins) to affect them.
    pub fn set_use_dip(&mut self, use_dip: bool) -> &mut Self {
        self.use_dip = use_dip;
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Logical shown state. Reflects the last show/hide call, not fade
    /// completion.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The view the badge floats over, if attached.
    pub fn target(&self) -> Option<ViewId> {
        self.target
    }

    /// The badge's own view in the host, once materialized.
    pub fn view(&self) -> Option<ViewId> {
        self.view
    }

    /// The wrapper container created by attachment, if any.
    pub fn wrapper(&self) -> Option<ViewId> {
        self.wrapper
    }

    /// Metrics currently used for unit conversion.
    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    // =========================================================================
    // Show / Hide / Toggle
    // =========================================================================

    /// Show the badge without animation.
    pub fn show<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        self.show_inner(host, None)
    }

    /// Show the badge with the stock fade-in.
    pub fn show_animated<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        self.show_inner(host, Some(FadeAnimation::fade_in()))
    }

    /// Show the badge with a custom fade.
    pub fn show_with<H: ContainerOps>(
        &mut self,
        host: &mut H,
        animation: FadeAnimation,
    ) -> HostResult<()> {
        self.show_inner(host, Some(animation))
    }

    /// Hide the badge without animation.
    pub fn hide<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        self.hide_inner(host, None)
    }

    /// Hide the badge with the stock fade-out.
    pub fn hide_animated<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        self.hide_inner(host, Some(FadeAnimation::fade_out()))
    }

    /// Hide the badge with a custom fade.
    pub fn hide_with<H: ContainerOps>(
        &mut self,
        host: &mut H,
        animation: FadeAnimation,
    ) -> HostResult<()> {
        self.hide_inner(host, Some(animation))
    }

    /// Show the badge if hidden, hide it if shown. No animation.
    pub fn toggle<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        if self.shown {
            self.hide(host)
        } else {
            self.show(host)
        }
    }

    /// Toggle with the stock fade-in/fade-out pair.
    pub fn toggle_animated<H: ContainerOps>(&mut self, host: &mut H) -> HostResult<()> {
        self.toggle_with(host, FadeAnimation::fade_in(), FadeAnimation::fade_out())
    }

    /// Toggle with custom entrance and exit fades.
    pub fn toggle_with<H: ContainerOps>(
        &mut self,
        host: &mut H,
        fade_in: FadeAnimation,
        fade_out: FadeAnimation,
    ) -> HostResult<()> {
        if self.shown {
            self.hide_with(host, fade_out)
        } else {
            self.show_with(host, fade_in)
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// The rounded-rectangle backdrop built from the current style.
    pub(crate) fn default_background(&self) -> Background {
        Background::rounded(
            self.style.background_color,
            self.metrics.dip_to_px(self.style.corner_radius_dip),
        )
    }

    /// Materialize the badge's view in the host if it does not exist yet.
    /// A badge without a target shows standalone this way.
    pub(crate) fn ensure_view<H: ContainerOps>(&mut self, host: &mut H) -> ViewId {
        match self.view {
            Some(view) => view,
            None => {
                let view = host.create_view();
                self.view = Some(view);
                view
            }
        }
    }

    fn show_inner<H: ContainerOps>(
        &mut self,
        host: &mut H,
        animation: Option<FadeAnimation>,
    ) -> HostResult<()> {
        let view = self.ensure_view(host);

        host.set_text(view, &self.text)?;
        host.set_text_style(
            view,
            TextStyle {
                size_px: self.metrics.sp_to_px(self.style.text_size_sp),
                bold: self.bold,
                color: self.style.text_color,
            },
        )?;

        let padding = self.metrics.dip_to_px(self.style.padding_dip);
        host.set_padding(view, Margins::symmetric(padding, 0.0))?;

        if self.background.is_none() {
            self.background = Some(self.default_background());
        }
        host.set_background(view, self.background)?;

        let margins = self
            .style
            .position
            .resolve_margins(self.style.margin_h, self.style.margin_v);
        host.set_layout_params(view, LayoutParams::new(self.style.position.gravity(), margins))?;

        match animation {
            Some(animation) => host.start_animation(view, animation)?,
            // Fades are transient: a plain show lands at full opacity
            // even when an earlier fade-out settled the view at zero.
            None => host.set_alpha(view, 1.0)?,
        }
        host.set_visible(view, true)?;
        self.shown = true;
        Ok(())
    }

    fn hide_inner<H: ContainerOps>(
        &mut self,
        host: &mut H,
        animation: Option<FadeAnimation>,
    ) -> HostResult<()> {
        self.shown = false;
        let Some(view) = self.view else {
            // Never materialized; nothing to hide in the host.
            return Ok(());
        };

        host.set_visible(view, false)?;
        match animation {
            Some(animation) => host.start_animation(view, animation)?,
            // A plain hide cancels any fade still in flight so the scene
            // stops animating the invisible view.
            None => host.set_alpha(view, 1.0)?,
        }
        Ok(())
    }
}

impl Default for BadgeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badgekit_host::{Color, Gravity, Scene, ViewOps};
    use std::time::Duration;

    fn scene_with_target() -> (Scene, ViewId) {
        let mut scene = Scene::new();
        let root = scene.create_container();
        let target = scene.create_view();
        scene.add_child(root, target).unwrap();
        (scene, target)
    }

    #[test]
    fn test_increment_from_default_text() {
        let mut badge = BadgeOverlay::new().with_text("0");
        assert_eq!(badge.increment(5), 5);
        assert_eq!(badge.text(), "5");
        assert_eq!(badge.increment(-3), 2);
        assert_eq!(badge.text(), "2");
        assert_eq!(badge.decrement(10), -8);
        assert_eq!(badge.text(), "-8");
    }

    #[test]
    fn test_increment_unparsable_counts_as_zero() {
        let mut badge = BadgeOverlay::new().with_text("new!");
        assert_eq!(badge.increment(3), 3);
        assert_eq!(badge.text(), "3");

        let mut badge = BadgeOverlay::new();
        assert_eq!(badge.text(), "");
        assert_eq!(badge.increment(7), 7);
    }

    #[test]
    fn test_decrement_is_negated_increment() {
        for offset in [-4, 0, 3, 25] {
            let mut a = BadgeOverlay::new().with_text("10");
            let mut b = BadgeOverlay::new().with_text("10");
            assert_eq!(a.decrement(offset), b.increment(-offset));
            assert_eq!(a.text(), b.text());
        }
    }

    #[test]
    fn test_show_hide_shown_flag() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();

        badge.show(&mut scene).unwrap();
        assert!(badge.is_shown());
        badge.hide(&mut scene).unwrap();
        assert!(!badge.is_shown());
        badge.show(&mut scene).unwrap();
        assert!(badge.is_shown());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();

        // From hidden
        badge.toggle(&mut scene).unwrap();
        badge.toggle(&mut scene).unwrap();
        assert!(!badge.is_shown());

        // From shown
        badge.show(&mut scene).unwrap();
        badge.toggle(&mut scene).unwrap();
        badge.toggle(&mut scene).unwrap();
        assert!(badge.is_shown());
    }

    #[test]
    fn test_show_pushes_state_to_host_view() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();
        badge.set_text("12").set_bold(true);
        badge.show(&mut scene).unwrap();

        let view = badge.view().unwrap();
        assert!(scene.is_visible(view).unwrap());
        assert_eq!(scene.text(view).unwrap(), "12");

        let text_style = scene.text_style(view).unwrap();
        assert!(text_style.bold);
        assert_eq!(text_style.size_px, 12.0);
        assert_eq!(text_style.color, Color::WHITE);

        // Default 5 dip left/right padding at identity density
        let padding = scene.padding(view).unwrap();
        assert_eq!((padding.left, padding.right), (5.0, 5.0));
        assert_eq!((padding.top, padding.bottom), (0.0, 0.0));

        let bg = scene.background(view).unwrap().unwrap();
        assert_eq!(bg.color, Color::from_hex("#FF3B30").unwrap());
        assert_eq!(bg.radii.max(), 8.0);
    }

    #[test]
    fn test_show_applies_position_layout() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();
        badge.set_position(BadgePosition::BottomLeft);
        badge.set_margins(10.0, 20.0);
        badge.show(&mut scene).unwrap();

        let params = scene.layout_params(badge.view().unwrap()).unwrap();
        assert_eq!(params.gravity, Gravity::BottomLeft);
        let m = params.margins;
        assert_eq!((m.left, m.top, m.right, m.bottom), (10.0, 0.0, 0.0, 20.0));
    }

    #[test]
    fn test_standalone_show_without_target() {
        let mut scene = Scene::new();
        let mut badge = BadgeOverlay::new().with_text("9");
        badge.show(&mut scene).unwrap();

        assert!(badge.is_shown());
        assert_eq!(badge.target(), None);
        let view = badge.view().unwrap();
        assert!(scene.is_visible(view).unwrap());
        assert_eq!(scene.text(view).unwrap(), "9");
    }

    #[test]
    fn test_hide_before_materialize_is_noop() {
        let mut scene = Scene::new();
        let mut badge = BadgeOverlay::new();
        badge.hide(&mut scene).unwrap();
        assert!(!badge.is_shown());
        assert_eq!(badge.view(), None);
    }

    #[test]
    fn test_margin_dip_conversion_requires_flag_first() {
        let metrics = DisplayMetrics::new(2.0);
        let mut badge = BadgeOverlay::with_metrics(metrics);

        // Without the flag, margins are raw pixels.
        badge.set_margins(10.0, 20.0);
        assert_eq!(badge.horizontal_margin(), 10.0);

        // With the flag set first, margins convert through the density.
        let mut badge = BadgeOverlay::with_metrics(metrics);
        badge.set_use_dip(true).set_margin(10.0);
        assert_eq!(badge.horizontal_margin(), 20.0);
        assert_eq!(badge.vertical_margin(), 20.0);
    }

    #[test]
    fn test_default_margin_scales_with_density() {
        let badge = BadgeOverlay::with_metrics(DisplayMetrics::new(3.0));
        assert_eq!(badge.horizontal_margin(), 15.0);
        assert_eq!(badge.vertical_margin(), 15.0);
    }

    #[test]
    fn test_background_rebuilt_on_color_change() {
        let mut badge = BadgeOverlay::new();
        assert!(badge.background.is_none());

        badge.set_background_color(Color::from_rgb8(0, 0x7A, 0xFF));
        let bg = badge.background.unwrap();
        assert_eq!(bg.color, Color::from_rgb8(0, 0x7A, 0xFF));
        assert_eq!(bg.radii.max(), 8.0);
    }

    #[test]
    fn test_animated_show_starts_fade() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();
        badge.show_animated(&mut scene).unwrap();

        // Shown flag is set optimistically while the fade runs.
        assert!(badge.is_shown());
        let view = badge.view().unwrap();
        assert!(scene.is_visible(view).unwrap());
        assert_eq!(scene.alpha(view).unwrap(), 0.0);
        assert!(scene.has_running_animations());

        scene.advance(Duration::from_millis(400));
        assert_eq!(scene.alpha(view).unwrap(), 1.0);
        assert!(!scene.has_running_animations());
    }

    #[test]
    fn test_animated_hide_fades_out() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();
        badge.show(&mut scene).unwrap();
        badge.hide_animated(&mut scene).unwrap();

        assert!(!badge.is_shown());
        let view = badge.view().unwrap();
        assert!(!scene.is_visible(view).unwrap());
        assert_eq!(scene.alpha(view).unwrap(), 1.0);

        scene.advance(Duration::from_millis(400));
        assert_eq!(scene.alpha(view).unwrap(), 0.0);
    }

    #[test]
    fn test_plain_show_after_animated_hide_restores_opacity() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();

        badge.show(&mut scene).unwrap();
        badge.hide_animated(&mut scene).unwrap();
        scene.advance(Duration::from_millis(400));

        let view = badge.view().unwrap();
        assert_eq!(scene.alpha(view).unwrap(), 0.0);

        // A non-animated show must land fully opaque, not inherit the
        // settled alpha of the finished fade-out.
        badge.show(&mut scene).unwrap();
        assert!(badge.is_shown());
        assert!(scene.is_visible(view).unwrap());
        assert_eq!(scene.alpha(view).unwrap(), 1.0);
    }

    #[test]
    fn test_plain_hide_cancels_running_fade() {
        let (mut scene, target) = scene_with_target();
        let mut badge = BadgeOverlay::new();
        badge.attach(&mut scene, target).unwrap();

        badge.show_animated(&mut scene).unwrap();
        scene.advance(Duration::from_millis(100));
        badge.hide(&mut scene).unwrap();

        let view = badge.view().unwrap();
        assert!(!scene.is_visible(view).unwrap());
        assert!(!scene.has_running_animations());
    }

    #[test]
    fn test_fluent_setters_chain() {
        let mut badge = BadgeOverlay::new();
        badge
            .set_position(BadgePosition::Center)
            .set_bold(true)
            .set_text_size(16.0)
            .set_text("99+");
        assert_eq!(badge.position(), BadgePosition::Center);
        assert!(badge.is_bold());
        assert_eq!(badge.text_size(), 16.0);
        assert_eq!(badge.text(), "99+");
    }
}
