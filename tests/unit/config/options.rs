use super::*;

#[test]
fn pairs_cover_every_recognized_key() {
    let values = [
        ("width", "320"),
        ("height", "90"),
        ("borderRadius", "12"),
        ("border", "0.1"),
        ("lightness", "55"),
        ("alpha", "0.8"),
        ("blur", "9"),
        ("displace", "0.5"),
        ("scale", "-200"),
        ("r", "1"),
        ("g", "2"),
        ("b", "3"),
        ("x", "g"),
        ("y", "R"),
        ("blend", "screen"),
        ("saturation", "1.5"),
        ("brightness", "1.2"),
        ("frost", "0.1"),
        ("icons", "true"),
        ("dockBoost", "false"),
        ("preset", "pill"),
        ("theme", "dark"),
        ("disableAnimation", "1"),
        ("animationDuration", "600"),
        ("animationDelay", "100"),
    ];
    assert_eq!(values.len(), RECOGNIZED_KEYS.len());
    let opts = EffectOptions::from_pairs(values).unwrap();
    assert_eq!(opts.config.width, Some(320.0));
    assert_eq!(opts.config.x, Some(Channel::G));
    assert_eq!(opts.config.blend_mode, Some(BlendMode::Screen));
    assert_eq!(opts.preset.as_deref(), Some("pill"));
    assert_eq!(opts.theme, Theme::Dark);
    assert!(opts.disable_animation);
    assert_eq!(opts.animation_duration(), Some(Duration::from_millis(600)));
    assert_eq!(opts.animation_delay(), Some(Duration::from_millis(100)));
}

#[test]
fn unknown_key_and_bad_values_are_config_errors() {
    assert!(matches!(
        EffectOptions::from_pairs([("wobble", "1")]),
        Err(GlassError::Config(_))
    ));
    assert!(EffectOptions::from_pairs([("alpha", "1.5")]).is_err());
    assert!(EffectOptions::from_pairs([("width", "wide")]).is_err());
    assert!(EffectOptions::from_pairs([("blur", "-1")]).is_err());
    assert!(EffectOptions::from_pairs([("x", "Q")]).is_err());
    assert!(EffectOptions::from_assignments(["width"]).is_err());
}

#[test]
fn assignments_trim_and_later_win() {
    let opts = EffectOptions::from_assignments(["scale = -100", "scale=-120"]).unwrap();
    assert_eq!(opts.config.scale, Some(-120.0));
}

#[test]
fn json_accepts_numbers_strings_bools_and_nulls() {
    let opts = EffectOptions::from_json_str(
        r#"{"preset":"bubble","frost":0.2,"x":"B","icons":true,"height":null}"#,
    )
    .unwrap();
    assert_eq!(opts.preset.as_deref(), Some("bubble"));
    assert_eq!(opts.config.frost, Some(0.2));
    assert_eq!(opts.config.x, Some(Channel::B));
    assert_eq!(opts.config.icons, Some(true));
    assert!(opts.config.height.is_none());

    assert!(EffectOptions::from_json_str("[1,2]").is_err());
    assert!(EffectOptions::from_json_str(r#"{"scale":[1]}"#).is_err());
    assert!(matches!(
        EffectOptions::from_json_str("{"),
        Err(GlassError::Serde(_))
    ));
}

#[test]
fn dock_boost_fills_brightness_only_when_unset() {
    let opts = EffectOptions::from_pairs([("dockBoost", "true")]).unwrap();
    assert_eq!(opts.overrides().brightness, Some(DOCK_BOOST_BRIGHTNESS));

    let opts =
        EffectOptions::from_pairs([("dockBoost", "true"), ("brightness", "0.9")]).unwrap();
    assert_eq!(opts.overrides().brightness, Some(0.9));
}

#[test]
fn animation_timings_are_bounded() {
    assert!(EffectOptions::from_pairs([("animationDuration", "1e300")]).is_err());
    assert!(EffectOptions::from_pairs([("animationDelay", "3600001")]).is_err());

    let opts = EffectOptions::from_pairs([("animationDuration", "3600000")]).unwrap();
    assert_eq!(opts.animation_duration(), Some(Duration::from_secs(3600)));

    let opts = EffectOptions {
        animation_duration: Some(1e300),
        animation_delay: Some(f64::NAN),
        ..EffectOptions::default()
    };
    assert_eq!(opts.animation_duration(), Some(Duration::from_secs(3600)));
    assert_eq!(opts.animation_delay(), Some(Duration::ZERO));
}
