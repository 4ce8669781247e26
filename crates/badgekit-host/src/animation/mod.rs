//! Fade animation primitives.
//!
//! This module provides:
//! - [`Easing`] curves and the [`ease`] function
//! - [`FadeAnimation`], an immutable per-call alpha-transition spec
//!
//! Specs are plain values; the host owns playback. See `Scene::advance`
//! for the reference implementation.

mod easing;
mod fade;

pub use easing::{Easing, ease, lerp_eased};
pub use fade::{DEFAULT_FADE_DURATION, FadeAnimation};
