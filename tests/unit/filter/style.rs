use super::*;
use crate::foundation::core::InstanceToken;

fn ids() -> FilterIds {
    match InstanceToken::new("lgstyle") {
        Ok(t) => FilterIds::new(&t),
        Err(e) => panic!("token: {e}"),
    }
}

#[test]
fn mirror_publishes_size_and_appearance() {
    let mut scope = StyleScope::new();
    let cfg = EffectConfig {
        frost: 0.05,
        saturation: 1.5,
        icons: true,
        ..EffectConfig::base()
    };
    scope.mirror(&cfg, 336.0, 96.0);
    assert_eq!(scope.var("--width"), Some("336"));
    assert_eq!(scope.var("--height"), Some("96"));
    assert_eq!(scope.var("--radius"), Some("16"));
    assert_eq!(scope.var("--frost"), Some("0.05"));
    assert_eq!(scope.var("--saturation"), Some("1.5"));
    assert_eq!(scope.var("--brightness"), None);
    assert_eq!(scope.data("icons"), Some("true"));
}

#[test]
fn brightness_var_follows_config() {
    let mut scope = StyleScope::new();
    let with = EffectConfig {
        brightness: Some(1.1),
        ..EffectConfig::base()
    };
    scope.mirror(&with, 10.0, 10.0);
    assert_eq!(scope.var("--brightness"), Some("1.1"));
    scope.mirror(&EffectConfig::base(), 10.0, 10.0);
    assert_eq!(scope.var("--brightness"), None);
}

#[test]
fn clear_removes_everything() {
    let mut scope = StyleScope::new();
    scope.mirror(&EffectConfig::base(), 1.0, 1.0);
    scope.set_theme(Theme::Dark);
    assert_eq!(scope.data("theme"), Some("dark"));
    assert!(!scope.is_empty());
    scope.clear();
    assert!(scope.is_empty());
    assert_eq!(scope.to_css_declarations(), "");
}

#[test]
fn declarations_are_sorted_by_name() {
    let mut scope = StyleScope::new();
    scope.set_var("--width", "2");
    scope.set_var("--frost", "0");
    assert_eq!(scope.to_css_declarations(), "--frost: 0;\n--width: 2;\n");
}

#[test]
fn backdrop_filter_includes_brightness_only_when_set() {
    let plain = ContainerStyle::from_config(&ids(), &EffectConfig::base());
    assert_eq!(plain.backdrop_filter(), "url(#lgstyle) saturate(1)");

    let boosted = ContainerStyle::from_config(
        &ids(),
        &EffectConfig {
            brightness: Some(1.1),
            saturation: 1.5,
            ..EffectConfig::base()
        },
    );
    assert_eq!(
        boosted.backdrop_filter(),
        "url(#lgstyle) brightness(1.1) saturate(1.5)"
    );
}

#[test]
fn container_css_has_theme_aware_background_and_ring() {
    let css = ContainerStyle::from_config(&ids(), &EffectConfig::base()).to_css();
    assert!(css.contains("--frost: 0;"));
    assert!(css.contains("border-radius: 16px;"));
    assert!(css.contains(&format!(
        "background: light-dark({BACKGROUND_LIGHT}, {BACKGROUND_DARK});"
    )));
    assert!(css.contains("-webkit-backdrop-filter: url(#lgstyle) saturate(1);"));
    assert!(css.contains("0 0 2px 1px light-dark("));
    assert!(css.contains(BOX_SHADOW));
}
