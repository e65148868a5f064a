use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        tween::{Lerp, Tween},
    },
    config::{model::ConfigPatch, model::EffectConfig, options::EffectOptions, resolve::ConfigResolver},
    displacement::image::{DisplacementImage, DisplacementImageBuilder},
    filter::{
        binder::{BindOutcome, FilterGraphBinder},
        graph::{FilterGraph, FilterIds, FilterTarget},
        style::{ContainerStyle, StyleScope},
    },
    foundation::{
        core::{InstanceToken, Size, Theme},
        error::Recovery,
    },
    lifecycle::{
        controller::{BindProgress, LifecycleController, LifecycleState, RetryPolicy},
        entrance::{ChildGroup, EntranceAnimation, EntranceConfig, Pose},
        theme::{THEME_FADE, ThemeTransition},
    },
    observe::size::{ResizeSource, SizeObserver, effective_size},
};

/// Length of a preset morph.
pub const MORPH_DURATION: Duration = Duration::from_millis(500);

/// Counters of everything an effect did or absorbed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EngineStats {
    /// Displacement maps built.
    pub builds: u64,
    /// Bind attempts, successful or not.
    pub bind_attempts: u64,
    /// Successful binds.
    pub binds: u64,
    /// Absorbed [`Recovery::ConfigurationGap`]s.
    pub configuration_gaps: u64,
    /// Absorbed [`Recovery::BindTargetMissing`]s.
    pub missing_targets: u64,
    /// Absorbed [`Recovery::DegenerateGeometry`]s.
    pub degenerate_geometry: u64,
    /// Entrance animations started (at most one per instance).
    pub entrance_starts: u64,
}

/// Construction-time parameters of a [`GlassEffect`] besides its options.
#[derive(Clone, Debug)]
pub struct EffectSetup {
    /// Namespace for filter and primitive ids.
    pub token: InstanceToken,
    /// Base defaults and the preset table of this call site.
    pub resolver: ConfigResolver,
    /// Retry behavior while the filter nodes are not attached.
    pub retry: RetryPolicy,
    /// Length of the theme cross-fade.
    pub theme_fade: Duration,
}

impl Default for EffectSetup {
    fn default() -> Self {
        Self {
            token: InstanceToken::unique(),
            resolver: ConfigResolver::glass(),
            retry: RetryPolicy::default(),
            theme_fade: THEME_FADE,
        }
    }
}

impl EffectSetup {
    /// Default setup using `resolver`.
    pub fn with_resolver(resolver: ConfigResolver) -> Self {
        Self {
            resolver,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
struct Morph {
    preset: String,
    tween: Tween<EffectConfig>,
}

/// One mounted glass effect.
///
/// Owns its filter target, size observer, style scope and timers. Time is passed in by
/// the host (`now` is any monotonic clock position); nothing here reads a clock. None of
/// the runtime methods fail: missing filter nodes, unset sizes and degenerate geometry
/// are absorbed, logged and counted in [`EngineStats`].
#[derive(Debug)]
pub struct GlassEffect<T> {
    token: InstanceToken,
    ids: FilterIds,
    target: T,
    resolver: ConfigResolver,
    options: EffectOptions,
    preset: String,
    config: EffectConfig,
    image: DisplacementImage,
    observer: SizeObserver,
    style: StyleScope,
    lifecycle: LifecycleController,
    entrance: EntranceAnimation,
    morph: Option<Morph>,
    theme: Theme,
    theme_fade: Duration,
    theme_transition: Option<ThemeTransition>,
    dirty: bool,
    stats: EngineStats,
    last_recoveries: Vec<Recovery>,
}

impl GlassEffect<FilterGraph> {
    /// Mount with default setup onto an attached in-memory [`FilterGraph`].
    pub fn mount<S>(container: &S, options: EffectOptions, now: Duration) -> Self
    where
        S: ResizeSource + ?Sized,
    {
        Self::create(
            container,
            options,
            EffectSetup::default(),
            |ids| FilterGraph::new(ids.clone()),
            now,
        )
    }

    /// Filter scaffold markup with the current bound attributes.
    pub fn filter_markup(&self) -> String {
        self.target.to_svg_markup()
    }
}

impl<T> GlassEffect<T>
where
    T: FilterTarget,
{
    /// Mount an effect on `container` and attempt the first bind at `now`.
    ///
    /// `make_target` receives the instance's ids and returns the filter target to bind
    /// into. If its nodes are not attached yet the effect stays in
    /// [`LifecycleState::BindingPending`] and retries from [`GlassEffect::tick`].
    pub fn create<S, F>(
        container: &S,
        options: EffectOptions,
        setup: EffectSetup,
        make_target: F,
        now: Duration,
    ) -> Self
    where
        S: ResizeSource + ?Sized,
        F: FnOnce(&FilterIds) -> T,
    {
        let EffectSetup {
            token,
            resolver,
            retry,
            theme_fade,
        } = setup;
        let ids = FilterIds::new(&token);
        let target = make_target(&ids);

        let requested = options
            .preset
            .clone()
            .unwrap_or_else(|| resolver.table().default_name().to_string());
        let preset = resolver.canonical_preset(&requested).to_string();
        let config = resolver.resolve(&preset, &options.overrides());

        let observer = SizeObserver::attach(container);
        let (image, recoveries) = build_image(&config, observer.current());

        let mut style = StyleScope::new();
        style.set_theme(options.theme);
        style.set_data("mode", preset.as_str());

        let mut lifecycle = LifecycleController::new(token.as_str(), retry);
        lifecycle.mount();

        let mut effect = Self {
            entrance: EntranceAnimation::new(EntranceConfig::from_options(&options)),
            theme: options.theme,
            token,
            ids,
            target,
            resolver,
            options,
            preset,
            config,
            image,
            observer,
            style,
            lifecycle,
            morph: None,
            theme_fade,
            theme_transition: None,
            dirty: false,
            stats: EngineStats {
                builds: 1,
                ..EngineStats::default()
            },
            last_recoveries: Vec::new(),
        };
        for r in recoveries {
            effect.absorb(r);
        }
        tracing::debug!(
            instance = %effect.token,
            preset = effect.preset.as_str(),
            "glass effect created"
        );
        effect.attempt_bind(now);
        effect
    }

    /// Merge `patch` into the per-instance overrides and apply it in place.
    ///
    /// Cancels a running preset morph.
    pub fn update_config(&mut self, patch: &ConfigPatch, now: Duration) {
        if self.lifecycle.is_destroyed() {
            return;
        }
        self.options.config = self.options.config.merged_with(patch);
        self.config = self.resolver.resolve(&self.preset, &self.options.overrides());
        if self.morph.take().is_some() {
            // The morph published its target's discrete attributes up front.
            self.style.set_data("mode", self.preset.as_str());
            self.style.set_data("icons", self.config.icons.to_string());
        }
        self.dirty = true;
        self.refresh(now);
    }

    /// Report a new container size. Coalesced and applied on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.observer.notify(width, height);
    }

    /// Advance to clock time `now`: apply size changes, morph steps and due retries.
    pub fn tick(&mut self, now: Duration) {
        if self.lifecycle.is_destroyed() {
            return;
        }

        if let Some(size) = self.observer.take_change() {
            tracing::trace!(instance = %self.token, width = size.width, height = size.height, "resized");
            self.dirty = true;
        }

        if let Some(morph) = &self.morph {
            self.config = morph.tween.sample(now);
            self.dirty = true;
            if morph.tween.is_finished(now) {
                self.finish_morph();
            }
        }

        self.refresh(now);

        if self.lifecycle.poll_retry(now) {
            self.attempt_bind(now);
        }

        if self
            .theme_transition
            .as_ref()
            .is_some_and(|t| t.is_finished(now))
        {
            self.theme_transition = None;
        }
    }

    /// Tween every numeric field towards preset `name`, snapping discrete fields now.
    ///
    /// Unknown names morph to the table default. On completion `name` becomes the
    /// current preset and per-instance value overrides are dropped. With animation
    /// disabled the switch is immediate. Returns the preset actually used.
    pub fn morph_to_preset(&mut self, name: &str, now: Duration) -> &str {
        if self.lifecycle.is_destroyed() {
            return &self.preset;
        }
        let preset = self.resolver.canonical_preset(name).to_string();
        let mut options = self.options.clone();
        options.config = ConfigPatch::default();
        let target = self.resolver.resolve(&preset, &options.overrides());

        self.style.set_data("mode", preset.as_str());
        self.style.set_data("icons", target.icons.to_string());
        self.config = EffectConfig::lerp(&self.config, &target, 0.0);
        self.dirty = true;

        let morph = Morph {
            preset,
            tween: Tween::new(self.config.clone(), target, now, MORPH_DURATION, Ease::OutQuad),
        };
        if self.options.disable_animation {
            self.morph = Some(morph);
            self.finish_morph();
            self.refresh(now);
        } else {
            self.morph = Some(morph);
        }
        self.morph
            .as_ref()
            .map(|m| m.preset.as_str())
            .unwrap_or(self.preset.as_str())
    }

    /// Switch the root color scheme, cross-fading unless animation is disabled.
    pub fn set_theme(&mut self, theme: Theme, now: Duration) {
        if self.lifecycle.is_destroyed() || theme == self.theme {
            return;
        }
        let from = self.theme;
        self.theme = theme;
        self.options.theme = theme;
        self.style.set_theme(theme);
        if !self.options.disable_animation {
            self.theme_transition = Some(ThemeTransition::new(from, theme, now, self.theme_fade));
        }
    }

    /// Unmount: cancel timers, disconnect the observer and clear the style scope.
    ///
    /// Returns `false` if already destroyed.
    pub fn destroy(&mut self) -> bool {
        let Some(cancelled) = self.lifecycle.destroy() else {
            return false;
        };
        self.observer.disconnect();
        self.style.clear();
        self.morph = None;
        self.theme_transition = None;
        tracing::debug!(instance = %self.token, cancelled, "glass effect destroyed");
        true
    }

    /// Instance token.
    pub fn token(&self) -> &InstanceToken {
        &self.token
    }

    /// Filter and primitive ids of this instance.
    pub fn ids(&self) -> &FilterIds {
        &self.ids
    }

    /// Filter target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable filter target, e.g. to attach nodes.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Effective config (mid-morph values while a morph runs).
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Current preset name.
    pub fn preset(&self) -> &str {
        &self.preset
    }

    /// Options as last updated.
    pub fn options(&self) -> &EffectOptions {
        &self.options
    }

    /// Last built displacement map.
    pub fn image(&self) -> &DisplacementImage {
        &self.image
    }

    /// Published style variables and data attributes.
    pub fn style(&self) -> &StyleScope {
        &self.style
    }

    /// Inline style of the container for the current config.
    pub fn container_style(&self) -> ContainerStyle {
        ContainerStyle::from_config(&self.ids, &self.config)
    }

    /// Last observed container size.
    pub fn measured_size(&self) -> Size {
        self.observer.current()
    }

    /// Lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Number of scheduled timers.
    pub fn pending_timers(&self) -> usize {
        self.lifecycle.pending_timers()
    }

    /// Whether the size observer is connected.
    pub fn is_observing(&self) -> bool {
        self.observer.is_connected()
    }

    /// Counters.
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Recoveries absorbed by the most recent build or bind.
    pub fn last_recoveries(&self) -> &[Recovery] {
        &self.last_recoveries
    }

    /// Entrance animation state.
    pub fn entrance(&self) -> &EntranceAnimation {
        &self.entrance
    }

    /// Container pose at `now`.
    pub fn container_pose(&self, now: Duration) -> Pose {
        self.entrance.container_pose(now)
    }

    /// Pose of a child group at `now`.
    pub fn group_pose(&self, group: ChildGroup, now: Duration) -> Pose {
        self.entrance.group_pose(group, now)
    }

    /// Root color scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Running theme cross-fade.
    pub fn theme_transition(&self) -> Option<&ThemeTransition> {
        self.theme_transition.as_ref()
    }

    /// Whether a preset morph is running.
    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    fn refresh(&mut self, now: Duration) {
        if !self.dirty {
            return;
        }
        self.rebuild();
        // While pending, the retry timer owns binding.
        if matches!(
            self.lifecycle.state(),
            LifecycleState::Ready | LifecycleState::GaveUp { .. }
        ) {
            self.attempt_bind(now);
        }
    }

    fn rebuild(&mut self) {
        self.last_recoveries.clear();
        let (image, recoveries) = build_image(&self.config, self.observer.current());
        self.image = image;
        self.stats.builds += 1;
        self.dirty = false;
        for r in recoveries {
            self.absorb(r);
        }
    }

    fn attempt_bind(&mut self, now: Duration) -> BindProgress {
        self.stats.bind_attempts += 1;
        let outcome = FilterGraphBinder::bind(
            &mut self.target,
            &self.ids,
            &self.image,
            &self.config,
            &mut self.style,
        );
        match &outcome {
            BindOutcome::Bound => self.stats.binds += 1,
            BindOutcome::TargetMissing { missing } => self.absorb(Recovery::BindTargetMissing {
                missing: missing.clone(),
            }),
        }

        let progress = self.lifecycle.record_bind(&outcome, now);
        match progress {
            BindProgress::BecameReady => {
                if self.entrance.start(now) {
                    self.stats.entrance_starts += 1;
                    tracing::debug!(instance = %self.token, "entrance started");
                }
            }
            // Content must not stay hidden behind an effect that will never appear.
            BindProgress::GaveUp { .. } => {
                self.entrance.skip();
            }
            BindProgress::Retrying { .. } | BindProgress::Unchanged => {}
        }
        progress
    }

    fn finish_morph(&mut self) {
        let Some(morph) = self.morph.take() else {
            return;
        };
        self.preset = morph.preset;
        self.options.config = ConfigPatch::default();
        self.options.preset = Some(self.preset.clone());
        self.config = self.resolver.resolve(&self.preset, &self.options.overrides());
        self.dirty = true;
    }

    fn absorb(&mut self, recovery: Recovery) {
        match &recovery {
            Recovery::ConfigurationGap { .. } => self.stats.configuration_gaps += 1,
            Recovery::BindTargetMissing { .. } => self.stats.missing_targets += 1,
            Recovery::DegenerateGeometry { .. } => self.stats.degenerate_geometry += 1,
        }
        tracing::debug!(instance = %self.token, %recovery, "recovered");
        self.last_recoveries.push(recovery);
    }
}

fn build_image(config: &EffectConfig, measured: Size) -> (DisplacementImage, Vec<Recovery>) {
    let (size, recoveries) = effective_size(config, Some(measured));
    (
        DisplacementImageBuilder::build(config, size.width, size.height),
        recoveries,
    )
}

#[cfg(test)]
#[path = "../tests/unit/engine/engine.rs"]
mod tests;
