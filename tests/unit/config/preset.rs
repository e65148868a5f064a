use super::*;

#[test]
fn glass_table_has_four_shapes_with_dock_default() {
    let t = PresetTable::glass();
    assert_eq!(t.default_name(), "dock");
    let names: Vec<&str> = t.names().collect();
    assert_eq!(names, vec!["bubble", "dock", "free", "pill"]);
}

#[test]
fn navbar_table_never_fixes_size() {
    let t = PresetTable::navbar();
    assert_eq!(t.default_name(), "navbar");
    for name in ["navbar", "compact", "pill"] {
        let p = t.get(name).unwrap();
        assert!(p.width.is_none() && p.height.is_none(), "{name}");
    }
}

#[test]
fn lookup_falls_back_to_default() {
    let t = PresetTable::glass();
    let (name, patch) = t.lookup("no-such-shape");
    assert_eq!(name, "dock");
    assert_eq!(patch, t.get("dock").unwrap());

    let (name, _) = t.lookup("bubble");
    assert_eq!(name, "bubble");
}

#[test]
fn new_rejects_missing_default() {
    let err = PresetTable::new("missing", [("a".to_string(), ConfigPatch::default())]);
    assert!(err.is_err());

    let ok = PresetTable::new("a", [("a".to_string(), ConfigPatch::default())]).unwrap();
    assert_eq!(ok.lookup("zzz").0, "a");
}
