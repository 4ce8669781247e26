//! Easing functions for fade animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a
//! transformed value that creates smoother-looking motion.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    Accelerate,
    /// Quadratic ease-out (starts fast, decelerates).
    Decelerate,
    /// Quadratic ease-in-out (smooth start and end).
    AccelerateDecelerate,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to the 0.0 to 1.0 range before easing.
///
/// # Example
///
/// ```
/// use badgekit_host::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Accelerate: slower at start
/// assert!(ease(Easing::Accelerate, 0.5) < 0.5);
///
/// // Decelerate: slower at end
/// assert!(ease(Easing::Decelerate, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::Accelerate => t * t,
        Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::AccelerateDecelerate => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(ease(Easing::Linear, 0.0), 0.0);
        assert_eq!(ease(Easing::Linear, 0.5), 0.5);
        assert_eq!(ease(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_accelerate() {
        assert_eq!(ease(Easing::Accelerate, 0.0), 0.0);
        assert!(ease(Easing::Accelerate, 0.5) < 0.5); // Slower at start
        assert_eq!(ease(Easing::Accelerate, 1.0), 1.0);
    }

    #[test]
    fn test_decelerate() {
        assert_eq!(ease(Easing::Decelerate, 0.0), 0.0);
        assert!(ease(Easing::Decelerate, 0.5) > 0.5); // Faster at start
        assert_eq!(ease(Easing::Decelerate, 1.0), 1.0);
    }

    #[test]
    fn test_accelerate_decelerate() {
        assert_eq!(ease(Easing::AccelerateDecelerate, 0.0), 0.0);
        assert_eq!(ease(Easing::AccelerateDecelerate, 0.5), 0.5); // Midpoint unchanged
        assert_eq!(ease(Easing::AccelerateDecelerate, 1.0), 1.0);
    }

    #[test]
    fn test_clamp() {
        // Values outside 0-1 should be clamped
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 0.0), 100.0);
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 0.5), 150.0);
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 1.0), 200.0);
    }
}
