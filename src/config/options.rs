use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::{
    config::model::ConfigPatch,
    foundation::core::{BlendMode, Channel, Theme},
    foundation::error::{GlassError, GlassResult},
};

/// Option keys accepted by [`EffectOptions::set`].
pub const RECOGNIZED_KEYS: &[&str] = &[
    "width",
    "height",
    "borderRadius",
    "border",
    "lightness",
    "alpha",
    "blur",
    "displace",
    "scale",
    "r",
    "g",
    "b",
    "x",
    "y",
    "blend",
    "saturation",
    "brightness",
    "frost",
    "icons",
    "dockBoost",
    "preset",
    "theme",
    "disableAnimation",
    "animationDuration",
    "animationDelay",
];

/// Backdrop brightness applied by `dockBoost` when no explicit brightness is set.
pub const DOCK_BOOST_BRIGHTNESS: f64 = 1.1;

/// Upper bound for `animationDuration` and `animationDelay`, in milliseconds (one hour).
pub const MAX_ANIMATION_MS: f64 = 3_600_000.0;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything a caller can configure on one effect instance.
///
/// Built from env-style `key=value` pairs ([`EffectOptions::from_pairs`]) or a flat JSON
/// object ([`EffectOptions::from_json_str`]); both go through the same key parser.
pub struct EffectOptions {
    /// Per-instance overrides (highest precedence).
    #[serde(flatten)]
    pub config: ConfigPatch,
    /// Preset name; `None` uses the table default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Root color scheme.
    pub theme: Theme,
    /// Skip entrance and theme animations entirely (reduced motion).
    pub disable_animation: bool,
    /// Entrance duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    /// Entrance delay in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay: Option<f64>,
    /// Add a brightness bump to the backdrop filter.
    pub dock_boost: bool,
}

impl EffectOptions {
    /// Parse env-style pairs. Later pairs win over earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> GlassResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Self::default();
        for (k, v) in pairs {
            out.set(k.as_ref(), v.as_ref())?;
        }
        Ok(out)
    }

    /// Parse `key=value` strings (as given on a command line).
    pub fn from_assignments<I, S>(items: I) -> GlassResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        out.apply_assignments(items)?;
        Ok(out)
    }

    /// Apply further `key=value` strings on top of `self`.
    pub fn apply_assignments<I, S>(&mut self, items: I) -> GlassResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            let item = item.as_ref();
            let Some((k, v)) = item.split_once('=') else {
                return Err(GlassError::config(format!(
                    "expected key=value, got '{item}'"
                )));
            };
            self.set(k.trim(), v.trim())?;
        }
        Ok(())
    }

    /// Parse a flat JSON object with the same keys as [`RECOGNIZED_KEYS`].
    ///
    /// `null` values are treated as absent.
    pub fn from_json_str(s: &str) -> GlassResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| GlassError::serde(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(GlassError::config("options JSON must be an object"));
        };

        let mut out = Self::default();
        for (k, v) in &map {
            let text = match v {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::String(s) => s.clone(),
                _ => {
                    return Err(GlassError::config(format!(
                        "option '{k}' must be a number, string or bool"
                    )));
                }
            };
            out.set(k, &text)?;
        }
        Ok(out)
    }

    /// Load options from a JSON file.
    pub fn from_path(path: &Path) -> GlassResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Set one option from its textual value.
    pub fn set(&mut self, key: &str, value: &str) -> GlassResult<()> {
        let c = &mut self.config;
        match key {
            "width" => c.width = Some(parse_num(key, value)?),
            "height" => c.height = Some(parse_num(key, value)?),
            "borderRadius" => c.border_radius = Some(parse_num(key, value)?),
            "border" => c.border_fraction = Some(parse_unit(key, value)?),
            "lightness" => c.lightness = Some(parse_ranged(key, value, 0.0, 100.0)?),
            "alpha" => c.alpha = Some(parse_unit(key, value)?),
            "blur" => c.blur_px = Some(parse_non_negative(key, value)?),
            "displace" => c.displace = Some(parse_non_negative(key, value)?),
            "scale" => c.scale = Some(parse_num(key, value)?),
            "r" => c.r = Some(parse_num(key, value)?),
            "g" => c.g = Some(parse_num(key, value)?),
            "b" => c.b = Some(parse_num(key, value)?),
            "x" => c.x = Some(Channel::parse(value)?),
            "y" => c.y = Some(Channel::parse(value)?),
            "blend" => c.blend_mode = Some(BlendMode::parse(value)?),
            "saturation" => c.saturation = Some(parse_non_negative(key, value)?),
            "brightness" => c.brightness = Some(parse_non_negative(key, value)?),
            "frost" => c.frost = Some(parse_unit(key, value)?),
            "icons" => c.icons = Some(parse_bool(key, value)?),
            "dockBoost" => self.dock_boost = parse_bool(key, value)?,
            "preset" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(GlassError::config("preset must be non-empty"));
                }
                self.preset = Some(name.to_string());
            }
            "theme" => self.theme = Theme::parse(value)?,
            "disableAnimation" => self.disable_animation = parse_bool(key, value)?,
            "animationDuration" => {
                self.animation_duration = Some(parse_ranged(key, value, 0.0, MAX_ANIMATION_MS)?)
            }
            "animationDelay" => {
                self.animation_delay = Some(parse_ranged(key, value, 0.0, MAX_ANIMATION_MS)?)
            }
            other => {
                return Err(GlassError::config(format!("unknown option '{other}'")));
            }
        }
        Ok(())
    }

    /// Per-instance overrides with `dockBoost` folded into `brightness`.
    pub fn overrides(&self) -> ConfigPatch {
        let mut patch = self.config.clone();
        if self.dock_boost && patch.brightness.is_none() {
            patch.brightness = Some(DOCK_BOOST_BRIGHTNESS);
        }
        patch
    }

    /// Entrance duration, if configured.
    pub fn animation_duration(&self) -> Option<Duration> {
        self.animation_duration.map(ms)
    }

    /// Entrance delay, if configured.
    pub fn animation_delay(&self) -> Option<Duration> {
        self.animation_delay.map(ms)
    }
}

// Fields are public, so values that bypassed `set` are clamped here too.
fn ms(v: f64) -> Duration {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, MAX_ANIMATION_MS) };
    Duration::from_secs_f64(v / 1000.0)
}

fn parse_num(key: &str, value: &str) -> GlassResult<f64> {
    let n: f64 = value
        .trim()
        .parse()
        .map_err(|_| GlassError::config(format!("option '{key}' must be a number")))?;
    if !n.is_finite() {
        return Err(GlassError::config(format!("option '{key}' must be finite")));
    }
    Ok(n)
}

fn parse_ranged(key: &str, value: &str, min: f64, max: f64) -> GlassResult<f64> {
    let n = parse_num(key, value)?;
    if n < min || n > max {
        return Err(GlassError::config(format!(
            "option '{key}' must be within [{min}, {max}]"
        )));
    }
    Ok(n)
}

fn parse_unit(key: &str, value: &str) -> GlassResult<f64> {
    parse_ranged(key, value, 0.0, 1.0)
}

fn parse_non_negative(key: &str, value: &str) -> GlassResult<f64> {
    let n = parse_num(key, value)?;
    if n < 0.0 {
        return Err(GlassError::config(format!("option '{key}' must be >= 0")));
    }
    Ok(n)
}

fn parse_bool(key: &str, value: &str) -> GlassResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(GlassError::config(format!("option '{key}' must be a bool"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
