use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        tween::{Lerp, Tween},
    },
    config::options::EffectOptions,
    foundation::math::lerp,
};

/// Visual transform of the container or a child group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// `0..=1`.
    pub opacity: f64,
    /// Vertical offset in px.
    pub translate_y: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Pose {
    /// Fully revealed, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Container pose before the entrance.
    pub const CONTAINER_HIDDEN: Pose = Pose {
        opacity: 0.0,
        translate_y: -12.0,
        scale: 0.96,
    };

    /// Child-group pose before its staggered reveal.
    pub const GROUP_HIDDEN: Pose = Pose {
        opacity: 0.0,
        translate_y: -6.0,
        scale: 1.0,
    };
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(a.opacity, b.opacity, t),
            translate_y: lerp(a.translate_y, b.translate_y, t),
            scale: lerp(a.scale, b.scale, t),
        }
    }
}

/// Content groups revealed one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildGroup {
    /// Leading slot (brand, home icon).
    LeftSlot,
    /// Navigation links.
    LinkList,
    /// Trailing slot (theme switch, extra links).
    RightSlot,
}

impl ChildGroup {
    /// Reveal order.
    pub const ALL: [ChildGroup; 3] = [Self::LeftSlot, Self::LinkList, Self::RightSlot];

    fn index(self) -> u32 {
        match self {
            Self::LeftSlot => 0,
            Self::LinkList => 1,
            Self::RightSlot => 2,
        }
    }
}

/// Timing of the entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    /// Container transition length.
    pub duration: Duration,
    /// Hold after the first successful bind before anything moves.
    pub delay: Duration,
    /// Offset between consecutive child groups.
    pub stagger: Duration,
    /// Curve shared by every track.
    pub ease: Ease,
    /// Skip motion entirely and show the rest pose.
    pub reduced_motion: bool,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            delay: Duration::ZERO,
            stagger: Duration::from_millis(80),
            ease: Ease::OutCubic,
            reduced_motion: false,
        }
    }
}

impl EntranceConfig {
    /// Defaults with `animationDuration`, `animationDelay` and `disableAnimation` applied.
    pub fn from_options(options: &EffectOptions) -> Self {
        let d = Self::default();
        Self {
            duration: options.animation_duration().unwrap_or(d.duration),
            delay: options.animation_delay().unwrap_or(d.delay),
            reduced_motion: options.disable_animation,
            ..d
        }
    }
}

/// One-shot fade/slide/scale reveal of the container plus a staggered reveal of its
/// child groups.
///
/// Stays hidden until [`EntranceAnimation::start`]; starting again is a no-op. With
/// reduced motion every pose is [`Pose::REST`] from the start.
#[derive(Clone, Debug, PartialEq)]
pub struct EntranceAnimation {
    config: EntranceConfig,
    container: Option<Tween<Pose>>,
    groups: Vec<(ChildGroup, Tween<Pose>)>,
    skipped: bool,
}

impl EntranceAnimation {
    /// Not yet started.
    pub fn new(config: EntranceConfig) -> Self {
        Self {
            config,
            container: None,
            groups: Vec::new(),
            skipped: false,
        }
    }

    /// Timing in use.
    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    /// Start at clock time `now`. Returns `false` if already started or skipped.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.has_started() {
            return false;
        }
        let c = self.config;
        let (duration, delay, stagger) = if c.reduced_motion {
            (Duration::ZERO, Duration::ZERO, Duration::ZERO)
        } else {
            (c.duration, c.delay, c.stagger)
        };

        self.container = Some(
            Tween::new(Pose::CONTAINER_HIDDEN, Pose::REST, now, duration, c.ease).with_delay(delay),
        );
        self.groups = ChildGroup::ALL
            .into_iter()
            .map(|g| {
                let tween = Tween::new(Pose::GROUP_HIDDEN, Pose::REST, now, duration, c.ease)
                    .with_delay(delay.saturating_add(stagger.saturating_mul(g.index() + 1)));
                (g, tween)
            })
            .collect();
        true
    }

    /// Reveal immediately without playing, consuming the one shot.
    pub fn skip(&mut self) -> bool {
        if self.has_started() {
            return false;
        }
        self.skipped = true;
        true
    }

    /// `true` once started or skipped.
    pub fn has_started(&self) -> bool {
        self.container.is_some() || self.skipped
    }

    /// Container pose at clock time `now`.
    pub fn container_pose(&self, now: Duration) -> Pose {
        if self.skipped || self.config.reduced_motion {
            return Pose::REST;
        }
        match &self.container {
            Some(t) => t.sample(now),
            None => Pose::CONTAINER_HIDDEN,
        }
    }

    /// Pose of `group` at clock time `now`.
    pub fn group_pose(&self, group: ChildGroup, now: Duration) -> Pose {
        if self.skipped || self.config.reduced_motion {
            return Pose::REST;
        }
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, t)| t.sample(now))
            .unwrap_or(Pose::GROUP_HIDDEN)
    }

    /// Clock time the last track settles, once started.
    pub fn end(&self) -> Option<Duration> {
        if self.skipped {
            return None;
        }
        let container = self.container.as_ref()?.end();
        Some(
            self.groups
                .iter()
                .map(|(_, t)| t.end())
                .fold(container, Duration::max),
        )
    }

    /// `true` when every track is at rest.
    pub fn is_finished(&self, now: Duration) -> bool {
        if self.skipped {
            return true;
        }
        self.end().is_some_and(|end| now >= end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/entrance.rs"]
mod tests;
