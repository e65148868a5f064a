/// Writes maps and configs into a filter graph.
pub mod binder;
/// Filter ids, the target trait and the in-memory graph.
pub mod graph;
/// Shared style variables and container style.
pub mod style;
