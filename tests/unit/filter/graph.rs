use super::*;

fn ids(t: &str) -> FilterIds {
    match InstanceToken::new(t) {
        Ok(token) => FilterIds::new(&token),
        Err(e) => panic!("token: {e}"),
    }
}

#[test]
fn ids_are_namespaced_by_token() {
    let a = ids("nav");
    assert_eq!(a.filter, "nav");
    assert_eq!(a.image, "nav-map");
    assert_eq!(a.channel_nodes(), ["nav-red", "nav-green", "nav-blue"]);
    assert_eq!(a.blur, "nav-blur");
    assert_eq!(a.filter_url(), "url(#nav)");

    let b = ids("dock");
    for id in a.bindable() {
        assert!(!b.bindable().contains(&id));
    }
}

#[test]
fn scaffold_has_defaults_before_any_bind() {
    let g = FilterGraph::new(ids("g"));
    assert_eq!(g.attribute("g-red", "xChannelSelector"), Some("R"));
    assert_eq!(g.attribute("g-red", "in2"), Some("map"));
    assert_eq!(g.attribute("g-blur", "stdDeviation"), Some("0.7"));
    assert_eq!(g.attribute("g-map", "href"), None);
    assert!(g.journal().is_empty());
}

#[test]
fn detached_graph_rejects_writes_until_attached() {
    let mut g = FilterGraph::detached(ids("d"));
    assert!(!g.is_attached("d-map"));
    assert!(!g.apply_attributes("d-map", &[("href", "x".to_string())]));
    assert!(g.journal().is_empty());

    g.attach();
    assert!(g.is_attached("d-map"));
    assert!(g.apply_attributes("d-map", &[("href", "x".to_string())]));
    assert_eq!(g.attribute("d-map", "href"), Some("x"));
    assert_eq!(g.journal().len(), 1);
}

#[test]
fn unknown_node_is_not_attached() {
    let mut g = FilterGraph::new(ids("u"));
    assert!(!g.is_attached("other-map"));
    assert!(!g.apply_attributes("other-map", &[("href", "x".to_string())]));
}

#[test]
fn write_replaces_existing_attribute_in_place() {
    let mut g = FilterGraph::new(ids("w"));
    g.apply_attributes("w-green", &[("xChannelSelector", "B".to_string())]);
    assert_eq!(g.attribute("w-green", "xChannelSelector"), Some("B"));
    let markup = g.to_svg_markup();
    assert_eq!(markup.matches("xChannelSelector=").count(), 3);
}

#[test]
fn markup_contains_full_primitive_chain() {
    let g = FilterGraph::new(ids("m"));
    let s = g.to_svg_markup();
    assert!(s.starts_with("<svg"));
    assert!(s.contains(r#"<filter id="m" color-interpolation-filters="sRGB">"#));
    assert_eq!(s.matches("<feDisplacementMap").count(), 3);
    assert_eq!(s.matches("<feColorMatrix").count(), 3);
    assert_eq!(s.matches(r#"mode="screen""#).count(), 2);
    assert_eq!(s.matches("<feGaussianBlur").count(), 1);
    let image_at = s.find("<feImage").unwrap_or(usize::MAX);
    let first_disp = s.find("<feDisplacementMap").unwrap_or(0);
    assert!(image_at < first_disp);
    assert!(s.ends_with("</filter></defs></svg>"));
}

#[test]
fn markup_escapes_attribute_values() {
    let mut g = FilterGraph::new(ids("e"));
    g.apply_attributes("e-map", &[("href", r#"a"b&c"#.to_string())]);
    assert!(g.to_svg_markup().contains(r#"href="a&quot;b&amp;c""#));
}

