use std::collections::BTreeMap;

use crate::{
    config::model::EffectConfig,
    filter::graph::FilterIds,
    foundation::{core::Theme, math::fmt_num},
};

/// Shared style context between the engine and the CSS-consuming layer.
///
/// Holds the custom properties (`--width`, `--radius`, ...) and root data attributes an
/// effect publishes. One scope belongs to one mounted effect: it is created at mount and
/// cleared at unmount, so nothing outlives the instance that wrote it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleScope {
    vars: BTreeMap<String, String>,
    data: BTreeMap<String, String>,
}

impl StyleScope {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom property `name` (including the leading `--`).
    pub fn set_var(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Remove custom property `name`.
    pub fn remove_var(&mut self, name: &str) {
        self.vars.remove(name);
    }

    /// Current value of custom property `name`.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Custom properties in name order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set root data attribute `data-<name>`.
    pub fn set_data(&mut self, name: &str, value: impl Into<String>) {
        self.data.insert(name.to_string(), value.into());
    }

    /// Current value of `data-<name>`.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// Publish the root color scheme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.set_data("theme", theme.as_str());
    }

    /// Mirror the size and appearance fields of `config` for a `width` x `height` box.
    ///
    /// `--brightness` is only present while the config carries a brightness.
    pub fn mirror(&mut self, config: &EffectConfig, width: f64, height: f64) {
        self.set_var("--width", fmt_num(width));
        self.set_var("--height", fmt_num(height));
        self.set_var("--radius", fmt_num(config.border_radius));
        self.set_var("--frost", fmt_num(config.frost));
        self.set_var("--saturation", fmt_num(config.saturation));
        self.set_var("--output-blur", fmt_num(config.displace));
        match config.brightness {
            Some(b) => self.set_var("--brightness", fmt_num(b)),
            None => self.remove_var("--brightness"),
        }
        self.set_data("icons", config.icons.to_string());
    }

    /// Whether nothing has been published.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.data.is_empty()
    }

    /// Drop everything this scope published.
    pub fn clear(&mut self) {
        self.vars.clear();
        self.data.clear();
    }

    /// `--name: value;` declarations, one per line.
    pub fn to_css_declarations(&self) -> String {
        self.vars
            .iter()
            .map(|(k, v)| format!("{k}: {v};\n"))
            .collect()
    }
}

/// Default light-scheme background; reads `--frost` from the scope.
pub const BACKGROUND_LIGHT: &str = "hsl(0 0% 100% / var(--frost, 0))";
/// Default dark-scheme background.
pub const BACKGROUND_DARK: &str = "hsl(0 0% 0% / var(--frost, 0))";
/// Default light-scheme ring color.
pub const BORDER_COLOR_LIGHT: &str = "color-mix(in oklch, canvasText, #0000 85%)";
/// Default dark-scheme ring color.
pub const BORDER_COLOR_DARK: &str = "color-mix(in oklch, canvasText, #0000 65%)";
/// Default layered drop shadow.
pub const BOX_SHADOW: &str = "0px 4px 16px rgba(17, 17, 26, 0.05), 0px 8px 24px rgba(17, 17, 26, 0.05), 0px 16px 56px rgba(17, 17, 26, 0.05)";

/// Inline style of the glass container element.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Filter reference, e.g. `url(#lg1)`.
    pub filter_url: String,
    /// Optional backdrop brightness.
    pub brightness: Option<f64>,
    /// Backdrop saturation.
    pub saturation: f64,
    /// Background opacity, published as `--frost`.
    pub frost: f64,
    /// Corner radius in px.
    pub border_radius: f64,
    /// Background under a light scheme.
    pub background_light: String,
    /// Background under a dark scheme.
    pub background_dark: String,
    /// Inset ring color under a light scheme.
    pub border_color_light: String,
    /// Inset ring color under a dark scheme.
    pub border_color_dark: String,
    /// Outer drop shadow.
    pub box_shadow: String,
}

impl ContainerStyle {
    /// Style for `config` with the default colors and shadow.
    pub fn from_config(ids: &FilterIds, config: &EffectConfig) -> Self {
        Self {
            filter_url: ids.filter_url(),
            brightness: config.brightness,
            saturation: config.saturation,
            frost: config.frost,
            border_radius: config.border_radius,
            background_light: BACKGROUND_LIGHT.to_string(),
            background_dark: BACKGROUND_DARK.to_string(),
            border_color_light: BORDER_COLOR_LIGHT.to_string(),
            border_color_dark: BORDER_COLOR_DARK.to_string(),
            box_shadow: BOX_SHADOW.to_string(),
        }
    }

    /// `backdrop-filter` value: `url(#id) [brightness(b)] saturate(s)`.
    pub fn backdrop_filter(&self) -> String {
        match self.brightness {
            Some(b) => format!(
                "{} brightness({}) saturate({})",
                self.filter_url,
                fmt_num(b),
                fmt_num(self.saturation)
            ),
            None => format!("{} saturate({})", self.filter_url, fmt_num(self.saturation)),
        }
    }

    /// Property/value pairs in emission order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let filter = self.backdrop_filter();
        vec![
            ("--frost", fmt_num(self.frost)),
            ("--saturation", fmt_num(self.saturation)),
            ("border-radius", format!("{}px", fmt_num(self.border_radius))),
            (
                "background",
                format!("light-dark({}, {})", self.background_light, self.background_dark),
            ),
            ("backdrop-filter", filter.clone()),
            ("-webkit-backdrop-filter", filter),
            (
                "box-shadow",
                format!(
                    "0 0 2px 1px light-dark({}, {}) inset, {}",
                    self.border_color_light, self.border_color_dark, self.box_shadow
                ),
            ),
        ]
    }

    /// Declarations joined into an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/style.rs"]
mod tests;
