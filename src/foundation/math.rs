/// Smallest width/height the displacement geometry accepts.
pub const MIN_DIMENSION: f64 = 1.0;

/// Clamp a measured or requested dimension to `>= MIN_DIMENSION`.
///
/// Non-finite input clamps to the minimum.
pub fn clamp_dimension(v: f64) -> f64 {
    if v.is_finite() {
        v.max(MIN_DIMENSION)
    } else {
        MIN_DIMENSION
    }
}

/// Format a number for SVG/CSS attribute text.
///
/// Uses the shortest round-trip representation, so integral values print without a
/// fractional part (`336`, not `336.0`). Non-finite values and negative zero print as
/// `0` so the generated markup always stays parseable.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() || v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
