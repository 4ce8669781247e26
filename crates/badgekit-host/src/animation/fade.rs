//! Fade animation specifications.
//!
//! A [`FadeAnimation`] is an immutable description of an alpha transition:
//! start and end alpha, duration, and easing curve. It carries no runtime
//! state, so a spec can be constructed per call and passed by value without
//! any cross-instance aliasing. Playback is the host's job (see
//! `Scene::advance`); starting a fade never blocks the caller.

use std::time::Duration;

use super::easing::{Easing, lerp_eased};

/// Duration shared by the stock fade-in and fade-out specs.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

/// An immutable alpha-transition specification.
///
/// # Example
///
/// ```
/// use badgekit_host::FadeAnimation;
///
/// let fade = FadeAnimation::fade_in();
/// assert_eq!(fade.alpha_at(0.0), 0.0);
/// assert_eq!(fade.alpha_at(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeAnimation {
    /// Alpha at the start of the animation.
    pub from_alpha: f32,
    /// Alpha at the end of the animation.
    pub to_alpha: f32,
    /// How long the fade runs.
    pub duration: Duration,
    /// Easing curve applied to the progress.
    pub easing: Easing,
}

impl FadeAnimation {
    /// Create a fade between two alpha values with the default duration
    /// and linear easing.
    pub fn new(from_alpha: f32, to_alpha: f32) -> Self {
        Self {
            from_alpha,
            to_alpha,
            duration: DEFAULT_FADE_DURATION,
            easing: Easing::Linear,
        }
    }

    /// The stock entrance fade: 0 to 1 alpha over 300 ms, decelerating.
    pub fn fade_in() -> Self {
        Self {
            from_alpha: 0.0,
            to_alpha: 1.0,
            duration: DEFAULT_FADE_DURATION,
            easing: Easing::Decelerate,
        }
    }

    /// The stock exit fade: 1 to 0 alpha over 300 ms, accelerating.
    pub fn fade_out() -> Self {
        Self {
            from_alpha: 1.0,
            to_alpha: 0.0,
            duration: DEFAULT_FADE_DURATION,
            easing: Easing::Accelerate,
        }
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sample the eased alpha for a progress value in the 0.0 to 1.0 range.
    #[inline]
    pub fn alpha_at(&self, progress: f32) -> f32 {
        lerp_eased(self.easing, self.from_alpha, self.to_alpha, progress)
    }

    /// Progress for a given elapsed time, before easing. A zero duration
    /// completes immediately.
    #[inline]
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_fades() {
        let fade_in = FadeAnimation::fade_in();
        assert_eq!(fade_in.from_alpha, 0.0);
        assert_eq!(fade_in.to_alpha, 1.0);
        assert_eq!(fade_in.duration, Duration::from_millis(300));
        assert_eq!(fade_in.easing, Easing::Decelerate);

        let fade_out = FadeAnimation::fade_out();
        assert_eq!(fade_out.from_alpha, 1.0);
        assert_eq!(fade_out.to_alpha, 0.0);
        assert_eq!(fade_out.easing, Easing::Accelerate);
    }

    #[test]
    fn test_alpha_endpoints() {
        let fade = FadeAnimation::fade_in();
        assert_eq!(fade.alpha_at(0.0), 0.0);
        assert_eq!(fade.alpha_at(1.0), 1.0);

        let fade = FadeAnimation::fade_out();
        assert_eq!(fade.alpha_at(0.0), 1.0);
        assert_eq!(fade.alpha_at(1.0), 0.0);
    }

    #[test]
    fn test_decelerate_front_loads_alpha() {
        // A decelerating fade-in covers more than half the alpha range
        // by the halfway point.
        let fade = FadeAnimation::fade_in();
        assert!(fade.alpha_at(0.5) > 0.5);
    }

    #[test]
    fn test_progress() {
        let fade = FadeAnimation::new(0.0, 1.0).with_duration(Duration::from_millis(100));
        assert_eq!(fade.progress_at(Duration::ZERO), 0.0);
        assert_eq!(fade.progress_at(Duration::from_millis(50)), 0.5);
        assert_eq!(fade.progress_at(Duration::from_millis(100)), 1.0);
        // Past the end clamps to 1.0
        assert_eq!(fade.progress_at(Duration::from_millis(250)), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let fade = FadeAnimation::new(0.0, 1.0).with_duration(Duration::ZERO);
        assert_eq!(fade.progress_at(Duration::ZERO), 1.0);
    }
}
