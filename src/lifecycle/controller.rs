use std::time::Duration;

use crate::{
    filter::binder::BindOutcome,
    lifecycle::timer::{TimerId, TimerQueue},
};

/// How failed initial binds are retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RetryPolicy {
    /// Fixed delay between attempts.
    pub delay: Duration,
    /// Failed attempts after which the controller gives up; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry every 50 ms with no limit.
    pub fn unbounded() -> Self {
        Self {
            max_attempts: None,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    /// 50 ms between attempts, give up after 200 failures (10 s).
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(50),
            max_attempts: Some(200),
        }
    }
}

/// Lifecycle of one mounted effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, not mounted.
    Uninitialized,
    /// Mounted; waiting for the filter nodes to accept a bind.
    BindingPending {
        /// Failed attempts so far.
        attempts: u32,
    },
    /// Bound at least once; the effect is visually live.
    Ready,
    /// The retry budget ran out before any bind succeeded.
    GaveUp {
        /// Failed attempts.
        attempts: u32,
    },
    /// Unmounted. Terminal.
    Destroyed,
}

/// What a bind outcome did to the lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindProgress {
    /// First successful bind: the entrance may start.
    BecameReady,
    /// A retry is scheduled.
    Retrying {
        /// Failed attempts so far.
        attempt: u32,
        /// Clock time of the next attempt.
        at: Duration,
    },
    /// The retry budget is exhausted.
    GaveUp {
        /// Failed attempts.
        attempts: u32,
    },
    /// No state change.
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BindRetry;

/// Drives [`LifecycleState`] and owns the bind retry timer.
#[derive(Clone, Debug)]
pub struct LifecycleController {
    label: String,
    state: LifecycleState,
    policy: RetryPolicy,
    timers: TimerQueue<BindRetry>,
    retry: Option<TimerId>,
}

impl LifecycleController {
    /// Controller for the instance named `label` (used in logs).
    pub fn new(label: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            label: label.into(),
            state: LifecycleState::Uninitialized,
            policy,
            timers: TimerQueue::new(),
            retry: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Retry policy in use.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// `true` once the first bind succeeded and until destroy.
    pub fn is_ready(&self) -> bool {
        self.state == LifecycleState::Ready
    }

    /// `true` after [`LifecycleController::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.state == LifecycleState::Destroyed
    }

    /// Number of scheduled timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Clock time of the next scheduled retry.
    pub fn next_retry(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// `Uninitialized -> BindingPending`. Returns `false` from any other state.
    pub fn mount(&mut self) -> bool {
        if self.state != LifecycleState::Uninitialized {
            return false;
        }
        self.state = LifecycleState::BindingPending { attempts: 0 };
        tracing::trace!(instance = %self.label, "mounted, binding pending");
        true
    }

    /// Feed the outcome of a bind attempt made at clock time `now`.
    pub fn record_bind(&mut self, outcome: &BindOutcome, now: Duration) -> BindProgress {
        match (self.state, outcome) {
            (LifecycleState::BindingPending { .. }, BindOutcome::Bound)
            | (LifecycleState::GaveUp { .. }, BindOutcome::Bound) => {
                self.cancel_retry();
                self.state = LifecycleState::Ready;
                tracing::debug!(instance = %self.label, "filter bound, ready");
                BindProgress::BecameReady
            }
            (LifecycleState::BindingPending { attempts }, BindOutcome::TargetMissing { missing }) => {
                let attempts = attempts.saturating_add(1);
                if self.policy.max_attempts.is_some_and(|max| attempts >= max) {
                    self.cancel_retry();
                    self.state = LifecycleState::GaveUp { attempts };
                    tracing::warn!(
                        instance = %self.label,
                        attempts,
                        "filter nodes never attached, giving up"
                    );
                    return BindProgress::GaveUp { attempts };
                }
                self.state = LifecycleState::BindingPending { attempts };
                let at = now.saturating_add(self.policy.delay);
                if self.retry.is_none() {
                    self.retry = Some(self.timers.schedule(at, BindRetry));
                }
                tracing::debug!(
                    instance = %self.label,
                    attempt = attempts,
                    missing = ?missing,
                    "bind target missing, retrying"
                );
                BindProgress::Retrying {
                    attempt: attempts,
                    at: self.next_retry().unwrap_or(at),
                }
            }
            (LifecycleState::Ready, BindOutcome::TargetMissing { missing }) => {
                tracing::debug!(
                    instance = %self.label,
                    missing = ?missing,
                    "re-bind target missing, staying ready"
                );
                BindProgress::Unchanged
            }
            _ => BindProgress::Unchanged,
        }
    }

    /// Fire due timers. Returns `true` when a bind retry should run now.
    pub fn poll_retry(&mut self, now: Duration) -> bool {
        let fired = self.timers.pop_due(now);
        if fired.is_empty() {
            return false;
        }
        self.retry = None;
        matches!(self.state, LifecycleState::BindingPending { .. })
    }

    /// Enter `Destroyed` from any state, cancelling pending timers.
    ///
    /// Returns the number of timers cancelled, or `None` if already destroyed.
    pub fn destroy(&mut self) -> Option<usize> {
        if self.is_destroyed() {
            return None;
        }
        let cancelled = self.timers.cancel_all();
        self.retry = None;
        self.state = LifecycleState::Destroyed;
        tracing::debug!(instance = %self.label, cancelled, "destroyed");
        Some(cancelled)
    }

    fn cancel_retry(&mut self) {
        if let Some(id) = self.retry.take() {
            self.timers.cancel(id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/controller.rs"]
mod tests;
