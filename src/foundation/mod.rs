/// Shared enums and the instance token.
pub mod core;
/// Error and recovery types.
pub mod error;
/// Numeric helpers.
pub mod math;
