use std::time::Duration;

use crate::animation::ease::Ease;

/// Values that can be interpolated by a [`Tween`].
pub trait Lerp: Sized {
    /// Interpolate from `a` (t = 0) to `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A time-based interpolation between two values.
///
/// Times are absolute positions on the host's clock; the tween itself holds no clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value before and at `start`.
    pub from: T,
    /// Value at and after `start + delay + duration`.
    pub to: T,
    /// Clock time the tween was started at.
    pub start: Duration,
    /// Hold time before interpolation begins.
    pub delay: Duration,
    /// Interpolation length; zero jumps straight to `to`.
    pub duration: Duration,
    /// Progress curve.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Tween starting at `start` with no delay.
    pub fn new(from: T, to: T, start: Duration, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            delay: Duration::ZERO,
            duration,
            ease,
        }
    }

    /// Builder-style delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in `[0, 1]` at clock time `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        let begin = self.start.saturating_add(self.delay);
        if now < begin {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        ((now - begin).as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased value at clock time `now`.
    pub fn sample(&self, now: Duration) -> T {
        let p = self.progress(now);
        if p <= 0.0 {
            return self.from.clone();
        }
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Clock time at which the tween reaches `to`.
    pub fn end(&self) -> Duration {
        self.start
            .saturating_add(self.delay)
            .saturating_add(self.duration)
    }

    /// Return `true` once `now` is at or past [`Tween::end`].
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
