//! Gravity, margins, and layout parameters for overlay placement.
//!
//! A container that holds an overlay child consumes a [`LayoutParams`]:
//! an alignment directive ([`Gravity`]) plus [`Margins`] that offset the
//! child from the edges the gravity pins it to.

use crate::Size;

/// Alignment directive for positioning a child within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gravity {
    /// Pin to the top-left corner.
    TopLeft,
    /// Pin to the top-right corner.
    #[default]
    TopRight,
    /// Pin to the bottom-left corner.
    BottomLeft,
    /// Pin to the bottom-right corner.
    BottomRight,
    /// Center within the container.
    Center,
}

/// Edge offsets around a view, in device pixels.
///
/// Margins are non-negative by contract; negative inputs are clamped to
/// zero by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    /// Left margin.
    pub left: f32,
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
}

impl Margins {
    /// Create new margins. Negative components are clamped to zero.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.max(0.0),
            top: top.max(0.0),
            right: right.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    /// Create uniform margins (same value on all sides).
    pub fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Create symmetric margins (same horizontal and vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal margin (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Size occupied by the margins.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }
}

/// Placement parameters for an overlay child: where it is pinned and how
/// far from the pinned edges it sits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    /// Alignment within the container.
    pub gravity: Gravity,
    /// Offsets from the container edges.
    pub margins: Margins,
}

impl LayoutParams {
    /// Create layout parameters from gravity and margins.
    pub fn new(gravity: Gravity, margins: Margins) -> Self {
        Self { gravity, margins }
    }
}
