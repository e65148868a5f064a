use crate::{
    animation::tween::Lerp,
    foundation::core::{BlendMode, Channel},
    foundation::math::lerp,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Concrete parameter set driving one glass effect.
///
/// Used both as the base defaults and as the result of [`crate::resolve`]. `width` and
/// `height` may stay unset after resolution; consumers substitute the measured size and
/// then a hard fallback (see [`crate::effective_size`]).
pub struct EffectConfig {
    /// Requested box width in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Requested box height in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Corner radius of the box and of every displacement-map rect.
    pub border_radius: f64,
    /// Highlight ring inset as a fraction `0..=1` of half the shorter side.
    #[serde(rename = "border")]
    pub border_fraction: f64,
    /// Highlight lightness, `0..=100`.
    pub lightness: f64,
    /// Highlight alpha, `0..=1`.
    pub alpha: f64,
    /// Blur applied to the highlight rect inside the map ("input blur").
    #[serde(rename = "blur")]
    pub blur_px: f64,
    /// Deviation of the final blur stage of the filter ("output blur").
    pub displace: f64,
    /// Base displacement scale.
    pub scale: f64,
    /// Chromatic offset added to `scale` for the red channel.
    pub r: f64,
    /// Chromatic offset added to `scale` for the green channel.
    pub g: f64,
    /// Chromatic offset added to `scale` for the blue channel.
    pub b: f64,
    /// Map channel driving horizontal displacement.
    pub x: Channel,
    /// Map channel driving vertical displacement.
    pub y: Channel,
    /// Blend mode of the vertical gradient layer.
    #[serde(rename = "blend")]
    pub blend_mode: BlendMode,
    /// Background frost opacity, `0..=1`.
    pub frost: f64,
    /// Backdrop saturation multiplier.
    pub saturation: f64,
    /// Optional backdrop brightness multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    /// Whether the host renders its icon content (`data-icons`).
    pub icons: bool,
}

impl EffectConfig {
    /// Base defaults shared by every preset table.
    pub fn base() -> Self {
        Self {
            width: None,
            height: None,
            border_radius: 16.0,
            border_fraction: 0.07,
            lightness: 50.0,
            alpha: 0.93,
            blur_px: 11.0,
            displace: 0.0,
            scale: -180.0,
            r: 0.0,
            g: 10.0,
            b: 20.0,
            x: Channel::R,
            y: Channel::B,
            blend_mode: BlendMode::Difference,
            frost: 0.0,
            saturation: 1.0,
            brightness: None,
            icons: false,
        }
    }

    /// Displacement scales for the red, green and blue passes.
    ///
    /// Distinct offsets are what produce the chromatic fringe.
    pub fn channel_scales(&self) -> [f64; 3] {
        [self.scale + self.r, self.scale + self.g, self.scale + self.b]
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::base()
    }
}

impl Lerp for EffectConfig {
    /// Numeric fields interpolate; selectors, blend mode and flags snap to `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn opt(a: Option<f64>, b: Option<f64>, t: f64) -> Option<f64> {
            match (a, b) {
                (Some(a), Some(b)) => Some(lerp(a, b, t)),
                (_, b) => b,
            }
        }

        Self {
            width: opt(a.width, b.width, t),
            height: opt(a.height, b.height, t),
            border_radius: lerp(a.border_radius, b.border_radius, t),
            border_fraction: lerp(a.border_fraction, b.border_fraction, t),
            lightness: lerp(a.lightness, b.lightness, t),
            alpha: lerp(a.alpha, b.alpha, t),
            blur_px: lerp(a.blur_px, b.blur_px, t),
            displace: lerp(a.displace, b.displace, t),
            scale: lerp(a.scale, b.scale, t),
            r: lerp(a.r, b.r, t),
            g: lerp(a.g, b.g, t),
            b: lerp(a.b, b.b, t),
            x: b.x,
            y: b.y,
            blend_mode: b.blend_mode,
            frost: lerp(a.frost, b.frost, t),
            saturation: lerp(a.saturation, b.saturation, t),
            brightness: opt(a.brightness, b.brightness, t),
            icons: b.icons,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Partial [`EffectConfig`]: a preset entry or a set of per-instance overrides.
pub struct ConfigPatch {
    /// Requested box width in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Requested box height in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Highlight ring inset fraction.
    #[serde(default, rename = "border", skip_serializing_if = "Option::is_none")]
    pub border_fraction: Option<f64>,
    /// Highlight lightness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    /// Highlight alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Highlight blur ("input blur").
    #[serde(default, rename = "blur", skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
    /// Final blur deviation ("output blur").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displace: Option<f64>,
    /// Base displacement scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Red-channel scale offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    /// Green-channel scale offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<f64>,
    /// Blue-channel scale offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    /// Horizontal displacement channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Channel>,
    /// Vertical displacement channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Channel>,
    /// Vertical gradient blend mode.
    #[serde(default, rename = "blend", skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    /// Background frost opacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frost: Option<f64>,
    /// Backdrop saturation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    /// Backdrop brightness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    /// Icon content flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<bool>,
}

impl ConfigPatch {
    /// Return `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Field-wise merge where fields set in `self` win over `below`.
    pub fn over(&self, below: &EffectConfig) -> EffectConfig {
        EffectConfig {
            width: self.width.or(below.width),
            height: self.height.or(below.height),
            border_radius: self.border_radius.unwrap_or(below.border_radius),
            border_fraction: self.border_fraction.unwrap_or(below.border_fraction),
            lightness: self.lightness.unwrap_or(below.lightness),
            alpha: self.alpha.unwrap_or(below.alpha),
            blur_px: self.blur_px.unwrap_or(below.blur_px),
            displace: self.displace.unwrap_or(below.displace),
            scale: self.scale.unwrap_or(below.scale),
            r: self.r.unwrap_or(below.r),
            g: self.g.unwrap_or(below.g),
            b: self.b.unwrap_or(below.b),
            x: self.x.unwrap_or(below.x),
            y: self.y.unwrap_or(below.y),
            blend_mode: self.blend_mode.unwrap_or(below.blend_mode),
            frost: self.frost.unwrap_or(below.frost),
            saturation: self.saturation.unwrap_or(below.saturation),
            brightness: self.brightness.or(below.brightness),
            icons: self.icons.unwrap_or(below.icons),
        }
    }

    /// Combine two patches; fields set in `newer` replace those in `self`.
    pub fn merged_with(&self, newer: &ConfigPatch) -> ConfigPatch {
        ConfigPatch {
            width: newer.width.or(self.width),
            height: newer.height.or(self.height),
            border_radius: newer.border_radius.or(self.border_radius),
            border_fraction: newer.border_fraction.or(self.border_fraction),
            lightness: newer.lightness.or(self.lightness),
            alpha: newer.alpha.or(self.alpha),
            blur_px: newer.blur_px.or(self.blur_px),
            displace: newer.displace.or(self.displace),
            scale: newer.scale.or(self.scale),
            r: newer.r.or(self.r),
            g: newer.g.or(self.g),
            b: newer.b.or(self.b),
            x: newer.x.or(self.x),
            y: newer.y.or(self.y),
            blend_mode: newer.blend_mode.or(self.blend_mode),
            frost: newer.frost.or(self.frost),
            saturation: newer.saturation.or(self.saturation),
            brightness: newer.brightness.or(self.brightness),
            icons: newer.icons.or(self.icons),
        }
    }

    /// Return `true` when the patch touches a field that changes the map geometry.
    pub fn touches_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
