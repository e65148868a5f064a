use crate::{
    config::model::EffectConfig,
    displacement::encode::to_data_uri,
    foundation::core::Size,
    foundation::math::{clamp_dimension, fmt_num},
};

/// A generated displacement map: the SVG document and its inline reference.
///
/// Always replaced wholesale when the config or size changes; never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplacementImage {
    document: String,
    uri: String,
    size: Size,
    border_px: f64,
    clamped: bool,
}

impl DisplacementImage {
    /// Serialized SVG document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// `data:image/svg+xml,<percent-encoded document>`.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Geometry the map was built for, after clamping.
    pub fn size(&self) -> Size {
        self.size
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt_num(self.size.width), fmt_num(self.size.height))
    }

    /// Inset of the highlight ring in px.
    pub fn border_px(&self) -> f64 {
        self.border_px
    }

    /// `true` when the requested size was degenerate and got clamped.
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }
}

/// Highlight-ring inset for a `width` x `height` box.
///
/// `min(width, height) * fraction * 0.5` with the fraction clamped to `[0, 1]`, so the
/// inset never exceeds half the shorter side.
pub fn border_px(config: &EffectConfig, width: f64, height: f64) -> f64 {
    let fraction = if config.border_fraction.is_finite() {
        config.border_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    width.min(height) * (fraction * 0.5)
}

/// Builds displacement maps from a resolved config and a measured size.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplacementImageBuilder;

impl DisplacementImageBuilder {
    /// Build the map for a `width` x `height` box.
    ///
    /// The document layers, bottom to top:
    /// 1. opaque black: zero-displacement baseline
    /// 2. rounded rect with a right-to-left red gradient: horizontal displacement
    /// 3. rounded rect with a top-to-bottom blue gradient blended with
    ///    `config.blend_mode`: vertical displacement and edge bias
    /// 4. rounded rect inset by [`border_px`], gray at `lightness`/`alpha`, blurred by
    ///    `blur_px`: the highlight ring that makes edges look refractive
    ///
    /// Non-positive or non-finite sizes clamp to 1 instead of failing. Equal inputs give
    /// byte-identical output.
    #[tracing::instrument(level = "trace", skip(config))]
    pub fn build(config: &EffectConfig, width: f64, height: f64) -> DisplacementImage {
        let w = clamp_dimension(width);
        let h = clamp_dimension(height);
        let clamped = !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0);
        if clamped {
            tracing::debug!(width, height, "degenerate displacement geometry, clamping");
        }

        let size = Size::new(w, h);
        let border = border_px(config, w, h);
        let document = render_document(config, size, border);
        let uri = to_data_uri(&document);

        DisplacementImage {
            document,
            uri,
            size,
            border_px: border,
            clamped,
        }
    }
}

fn render_document(config: &EffectConfig, size: Size, border: f64) -> String {
    let w = fmt_num(size.width);
    let h = fmt_num(size.height);
    let rx = fmt_num(config.border_radius.max(0.0));

    let mut s = String::with_capacity(1024);
    s.push_str(&format!(
        r#"<svg class="displacement-image" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}">"#
    ));
    s.push_str(concat!(
        "<defs>",
        r#"<linearGradient id="red" x1="100%" y1="0%" x2="0%" y2="0%">"#,
        r##"<stop offset="0%" stop-color="#000"/>"##,
        r#"<stop offset="100%" stop-color="red"/>"#,
        "</linearGradient>",
        r#"<linearGradient id="blue" x1="0%" y1="0%" x2="0%" y2="100%">"#,
        r##"<stop offset="0%" stop-color="#000"/>"##,
        r#"<stop offset="100%" stop-color="blue"/>"#,
        "</linearGradient>",
        "</defs>",
    ));
    s.push_str(&format!(
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="black"/>"#
    ));
    s.push_str(&format!(
        r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#red)"/>"#
    ));
    s.push_str(&format!(
        r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#blue)" style="mix-blend-mode: {}"/>"#,
        config.blend_mode.as_css()
    ));
    s.push_str(&format!(
        r#"<rect x="{x}" y="{y}" width="{iw}" height="{ih}" rx="{rx}" fill="hsla(0, 0%, {l}%, {a})" style="filter:blur({blur}px)"/>"#,
        x = fmt_num(border),
        y = fmt_num(border),
        iw = fmt_num((size.width - border * 2.0).max(0.0)),
        ih = fmt_num((size.height - border * 2.0).max(0.0)),
        l = fmt_num(config.lightness.clamp(0.0, 100.0)),
        a = fmt_num(config.alpha.clamp(0.0, 1.0)),
        blur = fmt_num(config.blur_px.max(0.0)),
    ));
    s.push_str("</svg>");
    s
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/image.rs"]
mod tests;
