use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{GlassError, GlassResult};

pub use kurbo::Size;

/// Color channel of the displacement map that drives one displacement axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Channel {
    /// Red channel.
    #[default]
    #[serde(alias = "r")]
    R,
    /// Green channel.
    #[serde(alias = "g")]
    G,
    /// Blue channel.
    #[serde(alias = "b")]
    B,
}

impl Channel {
    /// Attribute value used by `xChannelSelector`/`yChannelSelector`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::G => "G",
            Self::B => "B",
        }
    }

    /// Parse a channel selector, case-insensitively.
    pub fn parse(s: &str) -> GlassResult<Self> {
        match s.trim() {
            "R" | "r" => Ok(Self::R),
            "G" | "g" => Ok(Self::G),
            "B" | "b" => Ok(Self::B),
            other => Err(GlassError::config(format!(
                "channel selector must be one of R, G, B (got '{other}')"
            ))),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS `mix-blend-mode` keyword applied to the blue gradient layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// `normal`
    Normal,
    /// `multiply`
    Multiply,
    /// `screen`
    Screen,
    /// `overlay`
    Overlay,
    /// `darken`
    Darken,
    /// `lighten`
    Lighten,
    /// `color-dodge`
    ColorDodge,
    /// `color-burn`
    ColorBurn,
    /// `hard-light`
    HardLight,
    /// `soft-light`
    SoftLight,
    /// `difference`
    #[default]
    Difference,
    /// `exclusion`
    Exclusion,
    /// `hue`
    Hue,
    /// `saturation`
    Saturation,
    /// `color`
    Color,
    /// `luminosity`
    Luminosity,
    /// `plus-darker`
    PlusDarker,
    /// `plus-lighter`
    PlusLighter,
}

impl BlendMode {
    /// Every supported keyword, in declaration order.
    pub const ALL: [BlendMode; 18] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
        Self::PlusDarker,
        Self::PlusLighter,
    ];

    /// CSS keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "color-dodge",
            Self::ColorBurn => "color-burn",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
            Self::PlusDarker => "plus-darker",
            Self::PlusLighter => "plus-lighter",
        }
    }

    /// Parse a CSS keyword (ASCII case-insensitive).
    pub fn parse(s: &str) -> GlassResult<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_css() == key)
            .ok_or_else(|| GlassError::config(format!("unknown blend mode '{key}'")))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Color scheme written to the root `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the platform preference.
    #[default]
    System,
    /// Force light.
    Light,
    /// Force dark.
    Dark,
}

impl Theme {
    /// Attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse `light`, `dark` or `system`.
    pub fn parse(s: &str) -> GlassResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(GlassError::config(format!(
                "theme must be light, dark or system (got '{other}')"
            ))),
        }
    }
}

/// Unique per-instance token that namespaces filter and primitive ids.
///
/// Two effects mounted at the same time must never share a token, otherwise one
/// instance's bind would overwrite the other's primitives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InstanceToken(String);

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

impl InstanceToken {
    /// Allocate a fresh process-unique token (`lg1`, `lg2`, ...).
    pub fn unique() -> Self {
        let n = NEXT_TOKEN.fetch_add(1, Ordering::Relaxed);
        Self(format!("lg{n}"))
    }

    /// Wrap a caller-chosen token.
    ///
    /// The token ends up inside XML ids and `url(#...)` references, so it must start with
    /// an ASCII letter and contain only ASCII alphanumerics, `-` or `_`.
    pub fn new(token: impl Into<String>) -> GlassResult<Self> {
        let token = token.into();
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return Err(GlassError::validation("instance token must be non-empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(GlassError::validation(format!(
                "instance token '{token}' must start with an ASCII letter"
            )));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(GlassError::validation(format!(
                "instance token '{token}' may only contain [A-Za-z0-9_-]"
            )));
        }
        Ok(Self(token))
    }

    /// Token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
