use super::*;

#[test]
fn fmt_num_matches_attribute_text() {
    assert_eq!(fmt_num(336.0), "336");
    assert_eq!(fmt_num(-180.0), "-180");
    assert_eq!(fmt_num(0.93), "0.93");
    assert_eq!(fmt_num(336.0_f64.min(96.0) * (0.07 * 0.5)), "3.3600000000000003");
}

#[test]
fn fmt_num_sanitizes_non_finite_and_negative_zero() {
    assert_eq!(fmt_num(f64::NAN), "0");
    assert_eq!(fmt_num(f64::INFINITY), "0");
    assert_eq!(fmt_num(-0.0), "0");
}

#[test]
fn clamp_dimension_has_floor_of_one() {
    assert_eq!(clamp_dimension(0.0), 1.0);
    assert_eq!(clamp_dimension(-5.0), 1.0);
    assert_eq!(clamp_dimension(f64::NAN), 1.0);
    assert_eq!(clamp_dimension(0.5), 1.0);
    assert_eq!(clamp_dimension(240.5), 240.5);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(-180.0, -300.0, 0.0), -180.0);
    assert_eq!(lerp(-180.0, -300.0, 1.0), -300.0);
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
}
