//! Badge corner positions and their gravity/margin mapping.

use badgekit_host::{Gravity, Margins};

/// Where the badge sits relative to its host view.
///
/// Each position maps to a fixed [`Gravity`], and only the margin
/// components pointing at the pinned corner apply; the rest are zeroed.
/// The left/right mapping is fixed — there are no RTL-aware variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgePosition {
    /// Top-left corner of the host.
    TopLeft,
    /// Top-right corner of the host (the classic unread-count spot).
    #[default]
    TopRight,
    /// Bottom-left corner of the host.
    BottomLeft,
    /// Bottom-right corner of the host.
    BottomRight,
    /// Centered over the host.
    Center,
}

impl BadgePosition {
    /// The gravity the badge's wrapper container uses for this position.
    #[inline]
    pub fn gravity(&self) -> Gravity {
        match self {
            BadgePosition::TopLeft => Gravity::TopLeft,
            BadgePosition::TopRight => Gravity::TopRight,
            BadgePosition::BottomLeft => Gravity::BottomLeft,
            BadgePosition::BottomRight => Gravity::BottomRight,
            BadgePosition::Center => Gravity::Center,
        }
    }

    /// Resolve the configured horizontal/vertical margins into per-edge
    /// margins, zeroing the components that do not point at the pinned
    /// corner. `Center` takes no margins at all.
    pub fn resolve_margins(&self, horizontal: f32, vertical: f32) -> Margins {
        match self {
            BadgePosition::TopLeft => Margins::new(horizontal, vertical, 0.0, 0.0),
            BadgePosition::TopRight => Margins::new(0.0, vertical, horizontal, 0.0),
            BadgePosition::BottomLeft => Margins::new(horizontal, 0.0, 0.0, vertical),
            BadgePosition::BottomRight => Margins::new(0.0, 0.0, horizontal, vertical),
            BadgePosition::Center => Margins::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_mapping() {
        assert_eq!(BadgePosition::TopLeft.gravity(), Gravity::TopLeft);
        assert_eq!(BadgePosition::TopRight.gravity(), Gravity::TopRight);
        assert_eq!(BadgePosition::BottomLeft.gravity(), Gravity::BottomLeft);
        assert_eq!(BadgePosition::BottomRight.gravity(), Gravity::BottomRight);
        assert_eq!(BadgePosition::Center.gravity(), Gravity::Center);
    }

    #[test]
    fn test_margin_zeroing_per_corner() {
        let m = BadgePosition::TopLeft.resolve_margins(10.0, 20.0);
        assert_eq!((m.left, m.top, m.right, m.bottom), (10.0, 20.0, 0.0, 0.0));

        let m = BadgePosition::TopRight.resolve_margins(10.0, 20.0);
        assert_eq!((m.left, m.top, m.right, m.bottom), (0.0, 20.0, 10.0, 0.0));

        let m = BadgePosition::BottomLeft.resolve_margins(10.0, 20.0);
        assert_eq!((m.left, m.top, m.right, m.bottom), (10.0, 0.0, 0.0, 20.0));

        let m = BadgePosition::BottomRight.resolve_margins(10.0, 20.0);
        assert_eq!((m.left, m.top, m.right, m.bottom), (0.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_center_takes_no_margins() {
        let m = BadgePosition::Center.resolve_margins(10.0, 20.0);
        assert_eq!((m.left, m.top, m.right, m.bottom), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_default_position() {
        assert_eq!(BadgePosition::default(), BadgePosition::TopRight);
    }
}
