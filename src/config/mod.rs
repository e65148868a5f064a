/// Full and partial parameter sets.
pub mod model;
/// Caller-facing options and their key parser.
pub mod options;
/// Named preset tables.
pub mod preset;
/// Base/preset/override precedence.
pub mod resolve;
