//! Liquid Glass: a refractive "glass" effect built from SVG filter primitives.
//!
//! The crate turns a handful of physical-ish parameters (size, corner radius, highlight
//! ring, displacement scale, chromatic offsets) into a vector displacement map and the
//! attribute set of a chromatic displacement filter graph, and keeps both in sync with a
//! container that resizes and reconfigures at runtime.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: base defaults + named preset + per-instance overrides -> [`EffectConfig`]
//!    ([`resolve`], [`ConfigResolver`])
//! 2. **Measure**: config size, else observed container size, else 300x80
//!    ([`effective_size`], [`SizeObserver`])
//! 3. **Build**: [`EffectConfig`] + size -> self-contained `data:image/svg+xml` map
//!    ([`DisplacementImageBuilder`])
//! 4. **Bind**: map + config -> attributes of the live filter graph and the shared
//!    [`StyleScope`] ([`FilterGraphBinder`])
//! 5. **Lifecycle**: retry binds until the filter nodes exist, then play a one-shot
//!    entrance ([`LifecycleController`], [`EntranceAnimation`])
//!
//! [`GlassEffect`] wires these together for one mounted instance.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Cosmetic failure only**: the runtime never returns errors; absorbed conditions are
//!   reported as [`Recovery`] values, logged via `tracing` and counted in [`EngineStats`].
//! - **Deterministic**: equal inputs produce byte-identical maps; time is always passed in.
//! - **Isolated instances**: every filter and primitive id derives from an [`InstanceToken`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves and tweens.
pub mod animation;
/// Effect parameters, presets and option parsing.
pub mod config;
/// Displacement map generation, encoding and raster preview.
pub mod displacement;
/// Mounted-effect orchestration.
pub mod engine;
/// Filter graph, binder and style scope.
pub mod filter;
/// Core types, errors and numeric helpers.
pub mod foundation;
/// Bind retry, entrance and theme lifecycle.
pub mod lifecycle;
/// Container size observation.
pub mod observe;

pub use animation::{
    ease::Ease,
    tween::{Lerp, Tween},
};
pub use config::{
    model::{ConfigPatch, EffectConfig},
    options::{DOCK_BOOST_BRIGHTNESS, EffectOptions, MAX_ANIMATION_MS, RECOGNIZED_KEYS},
    preset::PresetTable,
    resolve::{ConfigResolver, resolve},
};
pub use displacement::{
    encode::{DATA_URI_PREFIX, decode_uri_component, encode_uri_component},
    image::{DisplacementImage, DisplacementImageBuilder, border_px},
    raster::{RasterMap, rasterize_displacement, write_png},
};
pub use engine::{EffectSetup, EngineStats, GlassEffect, MORPH_DURATION};
pub use filter::{
    binder::{BindOutcome, FilterGraphBinder},
    graph::{AttributeWrite, FilterGraph, FilterIds, FilterTarget},
    style::{ContainerStyle, StyleScope},
};
pub use foundation::core::{BlendMode, Channel, InstanceToken, Size, Theme};
pub use foundation::error::{GlassError, GlassResult, Recovery};
pub use lifecycle::{
    controller::{BindProgress, LifecycleController, LifecycleState, RetryPolicy},
    entrance::{ChildGroup, EntranceAnimation, EntranceConfig, Pose},
    theme::{THEME_FADE, ThemeTransition},
    timer::{TimerId, TimerQueue},
};
pub use observe::size::{FALLBACK_SIZE, ResizeSource, SizeObserver, effective_size};
