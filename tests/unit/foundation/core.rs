use super::*;

#[test]
fn channel_parse_accepts_both_cases() {
    assert_eq!(Channel::parse("r").unwrap(), Channel::R);
    assert_eq!(Channel::parse(" B ").unwrap(), Channel::B);
    assert!(Channel::parse("A").is_err());
}

#[test]
fn blend_mode_keywords_roundtrip() {
    for mode in BlendMode::ALL {
        assert_eq!(BlendMode::parse(mode.as_css()).unwrap(), mode);
    }
    assert_eq!(BlendMode::parse("Color-Dodge").unwrap(), BlendMode::ColorDodge);
    assert!(BlendMode::parse("dissolve").is_err());
}

#[test]
fn blend_mode_serde_uses_css_keywords() {
    let s = serde_json::to_string(&BlendMode::PlusLighter).unwrap();
    assert_eq!(s, "\"plus-lighter\"");
    let m: BlendMode = serde_json::from_str("\"soft-light\"").unwrap();
    assert_eq!(m, BlendMode::SoftLight);
}

#[test]
fn theme_parse() {
    assert_eq!(Theme::parse("DARK").unwrap(), Theme::Dark);
    assert_eq!(Theme::default(), Theme::System);
    assert!(Theme::parse("sepia").is_err());
}

#[test]
fn unique_tokens_never_collide() {
    let a = InstanceToken::unique();
    let b = InstanceToken::unique();
    assert_ne!(a, b);
    assert!(InstanceToken::new(a.as_str()).is_ok());
}

#[test]
fn token_validation_rejects_unsafe_ids() {
    assert!(InstanceToken::new("").is_err());
    assert!(InstanceToken::new("1abc").is_err());
    assert!(InstanceToken::new("nav:r1").is_err());
    assert!(InstanceToken::new("nav-bar_2").is_ok());
}
