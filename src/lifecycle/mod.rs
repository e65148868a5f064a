/// Bind state machine and retry policy.
pub mod controller;
/// One-shot staggered entrance.
pub mod entrance;
/// Theme cross-fade.
pub mod theme;
/// Cancellable timers.
pub mod timer;
