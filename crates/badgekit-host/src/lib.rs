//! Host-UI abstraction for Badgekit.
//!
//! Overlay widgets need very little from the framework that hosts them:
//! a view can be shown and hidden, carries layout parameters, a backdrop
//! and text, and can run a fade; a container can enumerate and re-parent
//! children. This crate captures that boundary so the widget crate stays
//! framework-agnostic:
//!
//! - [`types`]: geometry, color, and backdrop types
//! - [`metrics`]: dip/sp to pixel conversion
//! - [`layout`]: [`Gravity`], [`Margins`], [`LayoutParams`]
//! - [`animation`]: [`Easing`] curves and [`FadeAnimation`] specs
//! - [`scene`]: the [`ViewOps`]/[`ContainerOps`] capability traits and
//!   [`Scene`], an in-memory reference host
//!
//! # Logging
//!
//! The crate instruments scene mutation with the `tracing` crate under the
//! `badgekit_host::scene` target. Install a subscriber in your application
//! to see the output:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

pub mod animation;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod scene;
pub mod types;

pub use animation::{DEFAULT_FADE_DURATION, Easing, FadeAnimation, ease, lerp_eased};
pub use error::{HostError, HostResult};
pub use layout::{Gravity, LayoutParams, Margins};
pub use metrics::DisplayMetrics;
pub use scene::{ContainerOps, Scene, TextStyle, ViewId, ViewOps};
pub use types::{Background, Color, CornerRadii, Size};
