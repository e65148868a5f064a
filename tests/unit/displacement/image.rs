use super::*;
use crate::displacement::encode::from_data_uri;
use crate::foundation::core::BlendMode;

fn dock() -> EffectConfig {
    EffectConfig {
        width: Some(336.0),
        height: Some(96.0),
        displace: 0.2,
        icons: true,
        frost: 0.05,
        ..EffectConfig::base()
    }
}

#[test]
fn dock_map_has_expected_view_box_and_layers() {
    let img = DisplacementImageBuilder::build(&dock(), 336.0, 96.0);
    assert_eq!(img.view_box(), "0 0 336 96");
    let doc = img.document();
    assert!(doc.contains(r#"viewBox="0 0 336 96""#));
    assert!(doc.contains(r#"<rect x="0" y="0" width="336" height="96" fill="black"/>"#));
    assert!(doc.contains(r#"fill="url(#red)""#));
    assert!(doc.contains(r#"style="mix-blend-mode: difference""#));
    assert!(doc.contains(r#"fill="hsla(0, 0%, 50%, 0.93)""#));
    assert!(doc.contains("filter:blur(11px)"));
    assert!(!img.was_clamped());
}

#[test]
fn highlight_rect_is_inset_by_border() {
    let img = DisplacementImageBuilder::build(&dock(), 336.0, 96.0);
    // min(336, 96) * 0.07 * 0.5
    assert_eq!(img.border_px(), 96.0 * (0.07 * 0.5));
    assert!(img.document().contains(&format!(
        r#"x="{b}" y="{b}" width="{w}" height="{h}""#,
        b = fmt_num(img.border_px()),
        w = fmt_num(336.0 - img.border_px() * 2.0),
        h = fmt_num(96.0 - img.border_px() * 2.0),
    )));
}

#[test]
fn uri_is_percent_encoded_document() {
    let img = DisplacementImageBuilder::build(&dock(), 336.0, 96.0);
    assert!(img.uri().starts_with("data:image/svg+xml,%3Csvg"));
    assert!(!img.uri().contains(' '));
    assert_eq!(from_data_uri(img.uri()).unwrap(), img.document());
}

#[test]
fn build_is_byte_identical_for_equal_inputs() {
    let a = DisplacementImageBuilder::build(&dock(), 400.0, 120.0);
    let b = DisplacementImageBuilder::build(&dock().clone(), 400.0, 120.0);
    assert_eq!(a.uri(), b.uri());
    assert_eq!(a, b);
}

#[test]
fn degenerate_size_clamps_to_one_by_one() {
    let img = DisplacementImageBuilder::build(&dock(), 0.0, -5.0);
    assert!(img.was_clamped());
    assert_eq!(img.view_box(), "0 0 1 1");
    assert!(!img.uri().is_empty());

    let img = DisplacementImageBuilder::build(&dock(), f64::NAN, f64::INFINITY);
    assert_eq!(img.view_box(), "0 0 1 1");
}

#[test]
fn border_fraction_is_clamped_to_half_the_short_side() {
    let cfg = EffectConfig {
        border_fraction: 4.0,
        ..EffectConfig::base()
    };
    assert_eq!(border_px(&cfg, 200.0, 80.0), 40.0);
    let cfg = EffectConfig {
        border_fraction: -1.0,
        ..EffectConfig::base()
    };
    assert_eq!(border_px(&cfg, 200.0, 80.0), 0.0);
}

#[test]
fn blend_mode_is_written_to_the_vertical_layer() {
    let cfg = EffectConfig {
        blend_mode: BlendMode::HardLight,
        ..dock()
    };
    let img = DisplacementImageBuilder::build(&cfg, 100.0, 100.0);
    assert!(img.document().contains("mix-blend-mode: hard-light"));
}
