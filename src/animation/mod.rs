/// Easing curves.
pub mod ease;
/// Time-based interpolation.
pub mod tween;
