use super::*;

#[test]
fn base_defaults_match_playground_values() {
    let base = EffectConfig::base();
    assert_eq!(base.border_radius, 16.0);
    assert_eq!(base.border_fraction, 0.07);
    assert_eq!(base.scale, -180.0);
    assert_eq!((base.x, base.y), (Channel::R, Channel::B));
    assert_eq!(base.blend_mode, BlendMode::Difference);
    assert!(base.width.is_none() && base.height.is_none());
}

#[test]
fn channel_scales_add_offsets() {
    let cfg = EffectConfig {
        scale: -180.0,
        r: 0.0,
        g: 10.0,
        b: 20.0,
        ..EffectConfig::base()
    };
    assert_eq!(cfg.channel_scales(), [-180.0, -170.0, -160.0]);
}

#[test]
fn patch_over_only_touches_set_fields() {
    let patch = ConfigPatch {
        frost: Some(0.3),
        x: Some(Channel::G),
        ..ConfigPatch::default()
    };
    let out = patch.over(&EffectConfig::base());
    assert_eq!(out.frost, 0.3);
    assert_eq!(out.x, Channel::G);
    assert_eq!(out.scale, EffectConfig::base().scale);
}

#[test]
fn merged_with_prefers_newer() {
    let older = ConfigPatch {
        scale: Some(-100.0),
        frost: Some(0.1),
        ..ConfigPatch::default()
    };
    let newer = ConfigPatch {
        scale: Some(-50.0),
        ..ConfigPatch::default()
    };
    let m = older.merged_with(&newer);
    assert_eq!(m.scale, Some(-50.0));
    assert_eq!(m.frost, Some(0.1));
    assert!(!m.is_empty());
    assert!(ConfigPatch::default().is_empty());
}

#[test]
fn lerp_interpolates_numbers_and_snaps_selectors() {
    let a = EffectConfig {
        width: Some(100.0),
        scale: -180.0,
        ..EffectConfig::base()
    };
    let b = EffectConfig {
        width: Some(200.0),
        scale: -300.0,
        x: Channel::B,
        blend_mode: BlendMode::Screen,
        ..EffectConfig::base()
    };
    let mid = EffectConfig::lerp(&a, &b, 0.5);
    assert_eq!(mid.width, Some(150.0));
    assert_eq!(mid.scale, -240.0);
    assert_eq!(mid.x, Channel::B);
    assert_eq!(mid.blend_mode, BlendMode::Screen);
}

#[test]
fn serde_uses_option_key_names() {
    let v = serde_json::to_value(EffectConfig::base()).unwrap();
    assert_eq!(v["border"], 0.07);
    assert_eq!(v["blur"], 11.0);
    assert_eq!(v["blend"], "difference");
    assert_eq!(v["borderRadius"], 16.0);
    assert!(v.get("width").is_none());
}
