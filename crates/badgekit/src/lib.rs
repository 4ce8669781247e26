//! Badgekit — a small badge overlay widget.
//!
//! A [`BadgeOverlay`] renders a rounded bubble with a numeric or short
//! text indicator (unread counts, "new!" markers) over a corner or the
//! center of a host view. Attaching wraps the host view in a transparent
//! container that also holds the badge; showing and hiding can run a fade.
//!
//! The widget is host-agnostic: it drives any framework that implements
//! the [`badgekit_host`] capability traits. The bundled
//! [`Scene`](badgekit_host::Scene) host works out of the box and doubles
//! as the test harness.
//!
//! # Example
//!
//! ```
//! use badgekit::{BadgeOverlay, BadgePosition};
//! use badgekit_host::{ContainerOps, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.create_container();
//! let inbox_icon = scene.create_view();
//! scene.add_child(root, inbox_icon).unwrap();
//!
//! let mut badge = BadgeOverlay::new();
//! badge.attach(&mut scene, inbox_icon).unwrap();
//! badge
//!     .set_position(BadgePosition::TopRight)
//!     .set_bold(true)
//!     .increment(3);
//! badge.show_animated(&mut scene).unwrap();
//! assert!(badge.is_shown());
//! ```
//!
//! # Threading
//!
//! Everything here is synchronous and UI-thread-only, as view-tree
//! mutation requires. Starting a fade never blocks; the host advances it
//! on subsequent frames while the badge only tracks its logical shown
//! flag.

pub mod badge;
pub mod error;
pub mod position;
pub mod style;

mod attach;

pub use badge::BadgeOverlay;
pub use error::{AttachError, AttachResult};
pub use position::BadgePosition;
pub use style::{
    BadgeStyle, DEFAULT_CORNER_RADIUS_DIP, DEFAULT_MARGIN_DIP, DEFAULT_PADDING_DIP,
    DEFAULT_TEXT_SIZE_SP,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{AttachError, BadgeOverlay, BadgePosition, BadgeStyle};
    pub use badgekit_host::{ContainerOps, FadeAnimation, Scene, ViewOps};
}
