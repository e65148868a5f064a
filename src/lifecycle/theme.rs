use std::time::Duration;

use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::Theme,
};

/// Default cross-fade length for theme switches.
pub const THEME_FADE: Duration = Duration::from_millis(250);

/// Cross-fade between the old and new color scheme.
///
/// The new theme is applied immediately; the transition only describes how long the
/// snapshot of the old scheme stays visible on top of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeTransition {
    from: Theme,
    to: Theme,
    fade: Tween<f64>,
}

impl ThemeTransition {
    /// Cross-fade from `from` to `to` starting at `now`.
    pub fn new(from: Theme, to: Theme, now: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            fade: Tween::new(1.0, 0.0, now, duration, Ease::InOutQuad),
        }
    }

    /// Scheme being faded out.
    pub fn from(&self) -> Theme {
        self.from
    }

    /// Scheme being faded in.
    pub fn to(&self) -> Theme {
        self.to
    }

    /// Opacity of the old-scheme snapshot at `now`.
    pub fn old_opacity(&self, now: Duration) -> f64 {
        self.fade.sample(now)
    }

    /// `true` once the old snapshot is gone.
    pub fn is_finished(&self, now: Duration) -> bool {
        self.fade.is_finished(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/theme.rs"]
mod tests;
