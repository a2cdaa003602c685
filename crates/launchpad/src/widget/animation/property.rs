//! Time-based property animations.
//!
//! An [`AnimationSet`] holds at most one running animation per named
//! property. Starting a new animation on a property supersedes the one in
//! flight, picking up from wherever the caller says the value is now.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use launchpad_core::logging::targets;

use super::easing::{Easing, lerp_eased};

/// A single animation of one scalar property.
///
/// The clock starts at the first [`sample`](Self::sample), not at creation,
/// so an animation queued between frames does not skip ahead.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    start_time: Option<Instant>,
}

impl PropertyAnimation {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            start_time: None,
        }
    }

    #[inline]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Value at `now` and whether the animation has finished.
    pub fn sample(&mut self, now: Instant) -> (f32, bool) {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);

        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            return (self.to, true);
        }
        (lerp_eased(self.easing, self.from, self.to, raw_progress), false)
    }
}

/// Running animations keyed by property name.
#[derive(Debug, Default)]
pub struct AnimationSet {
    running: HashMap<&'static str, PropertyAnimation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `property`, replacing any animation already running on it.
    ///
    /// Returns the superseded animation, if there was one.
    pub fn animate(
        &mut self,
        property: &'static str,
        animation: PropertyAnimation,
    ) -> Option<PropertyAnimation> {
        tracing::trace!(
            target: targets::ANIMATION,
            property,
            from = animation.from,
            to = animation.to,
            duration_ms = animation.duration.as_millis() as u64,
            "starting property animation"
        );
        self.running.insert(property, animation)
    }

    /// Stop the animation on `property` where it is.
    pub fn cancel(&mut self, property: &str) -> Option<PropertyAnimation> {
        self.running.remove(property)
    }

    pub fn cancel_all(&mut self) {
        self.running.clear();
    }

    pub fn is_running(&self, property: &str) -> bool {
        self.running.contains_key(property)
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// The value `property` is heading to, if it is animating.
    pub fn target(&self, property: &str) -> Option<f32> {
        self.running.get(property).map(PropertyAnimation::to)
    }

    /// Advance every animation to `now`.
    ///
    /// Returns the new value of each animated property. Finished animations
    /// report their end value once and are then dropped.
    pub fn tick(&mut self, now: Instant) -> Vec<(&'static str, f32)> {
        let mut values = Vec::with_capacity(self.running.len());
        self.running.retain(|property, animation| {
            let (value, finished) = animation.sample(now);
            values.push((*property, value));
            if finished {
                tracing::trace!(target: targets::ANIMATION, property, value, "property animation finished");
            }
            !finished
        });
        values
    }
}
