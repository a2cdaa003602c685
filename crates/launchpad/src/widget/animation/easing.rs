//! Easing functions for property animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value, the same way a platform interpolator does.

use std::f32::consts::PI;

use serde::Deserialize;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Starts slow, accelerates.
    Accelerate,
    /// Starts fast, decelerates.
    Decelerate,
    /// Slow at both ends, fastest in the middle.
    #[default]
    AccelerateDecelerate,
}

/// Apply an easing function to a progress value.
///
/// # Example
///
/// ```
/// use launchpad::widget::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::Accelerate, 0.5) < 0.5);
/// assert!(ease(Easing::Decelerate, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::Accelerate => t * t,
        Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}
