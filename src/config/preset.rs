use std::collections::BTreeMap;

use crate::{
    config::model::ConfigPatch,
    foundation::error::{GlassError, GlassResult},
};

/// Named partial configurations for one call site.
///
/// Each call site (standalone effect, navbar, ...) plugs in its own table; the
/// resolver itself is shared. Unknown preset names fall back to the table's default.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetTable {
    default_preset: String,
    entries: BTreeMap<String, ConfigPatch>,
}

impl PresetTable {
    /// Build a table; `default_preset` must name one of `entries`.
    pub fn new(
        default_preset: impl Into<String>,
        entries: impl IntoIterator<Item = (String, ConfigPatch)>,
    ) -> GlassResult<Self> {
        let default_preset = default_preset.into();
        let entries: BTreeMap<String, ConfigPatch> = entries.into_iter().collect();
        if !entries.contains_key(&default_preset) {
            return Err(GlassError::validation(format!(
                "default preset '{default_preset}' is not in the table"
            )));
        }
        Ok(Self {
            default_preset,
            entries,
        })
    }

    /// Shapes of the standalone effect: `dock` (default), `pill`, `bubble`, `free`.
    pub fn glass() -> Self {
        let entries = [
            (
                "dock",
                ConfigPatch {
                    width: Some(336.0),
                    height: Some(96.0),
                    displace: Some(0.2),
                    icons: Some(true),
                    frost: Some(0.05),
                    ..ConfigPatch::default()
                },
            ),
            (
                "pill",
                ConfigPatch {
                    width: Some(200.0),
                    height: Some(80.0),
                    displace: Some(0.0),
                    frost: Some(0.0),
                    border_radius: Some(40.0),
                    ..ConfigPatch::default()
                },
            ),
            (
                "bubble",
                ConfigPatch {
                    width: Some(140.0),
                    height: Some(140.0),
                    displace: Some(0.0),
                    frost: Some(0.0),
                    border_radius: Some(70.0),
                    ..ConfigPatch::default()
                },
            ),
            (
                "free",
                ConfigPatch {
                    width: Some(140.0),
                    height: Some(280.0),
                    border_fraction: Some(0.15),
                    alpha: Some(0.74),
                    lightness: Some(60.0),
                    blur_px: Some(10.0),
                    displace: Some(0.0),
                    scale: Some(-300.0),
                    border_radius: Some(80.0),
                    ..ConfigPatch::default()
                },
            ),
        ];
        Self::from_static("dock", entries)
    }

    /// Navigation-bar shapes: `navbar` (default), `compact`, `pill`.
    ///
    /// None of these fix a size; the bar always follows its measured box.
    pub fn navbar() -> Self {
        let entries = [
            (
                "navbar",
                ConfigPatch {
                    border_radius: Some(12.0),
                    border_fraction: Some(0.15),
                    alpha: Some(0.74),
                    lightness: Some(60.0),
                    blur_px: Some(10.0),
                    displace: Some(0.2),
                    scale: Some(-300.0),
                    frost: Some(0.05),
                    saturation: Some(1.5),
                    brightness: Some(1.1),
                    icons: Some(false),
                    ..ConfigPatch::default()
                },
            ),
            (
                "compact",
                ConfigPatch {
                    border_radius: Some(10.0),
                    border_fraction: Some(0.1),
                    alpha: Some(0.8),
                    lightness: Some(55.0),
                    blur_px: Some(8.0),
                    displace: Some(0.1),
                    scale: Some(-220.0),
                    frost: Some(0.08),
                    saturation: Some(1.4),
                    icons: Some(false),
                    ..ConfigPatch::default()
                },
            ),
            (
                "pill",
                ConfigPatch {
                    border_radius: Some(999.0),
                    border_fraction: Some(0.2),
                    alpha: Some(0.74),
                    lightness: Some(60.0),
                    blur_px: Some(10.0),
                    displace: Some(0.0),
                    scale: Some(-260.0),
                    frost: Some(0.05),
                    saturation: Some(1.5),
                    icons: Some(false),
                    ..ConfigPatch::default()
                },
            ),
        ];
        Self::from_static("navbar", entries)
    }

    fn from_static<const N: usize>(
        default_preset: &'static str,
        entries: [(&'static str, ConfigPatch); N],
    ) -> Self {
        Self {
            default_preset: default_preset.to_string(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// Name of the fallback preset.
    pub fn default_name(&self) -> &str {
        &self.default_preset
    }

    /// Exact lookup.
    pub fn get(&self, name: &str) -> Option<&ConfigPatch> {
        self.entries.get(name)
    }

    /// Lookup with fallback to the default preset.
    ///
    /// Returns the name that was actually used along with its values.
    pub fn lookup<'a>(&'a self, name: &str) -> (&'a str, &'a ConfigPatch) {
        if let Some((k, v)) = self.entries.get_key_value(name) {
            return (k.as_str(), v);
        }
        tracing::debug!(
            preset = name,
            fallback = self.default_preset.as_str(),
            "unknown preset, using default"
        );
        // `new`/`from_static` guarantee the default is present.
        match self.entries.get_key_value(self.default_preset.as_str()) {
            Some((k, v)) => (k.as_str(), v),
            None => (self.default_preset.as_str(), &EMPTY_PATCH),
        }
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

static EMPTY_PATCH: ConfigPatch = ConfigPatch {
    width: None,
    height: None,
    border_radius: None,
    border_fraction: None,
    lightness: None,
    alpha: None,
    blur_px: None,
    displace: None,
    scale: None,
    r: None,
    g: None,
    b: None,
    x: None,
    y: None,
    blend_mode: None,
    frost: None,
    saturation: None,
    brightness: None,
    icons: None,
};

impl Default for PresetTable {
    fn default() -> Self {
        Self::glass()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/preset.rs"]
mod tests;
