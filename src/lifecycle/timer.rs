use std::time::Duration;

/// Handle of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug, PartialEq)]
struct Timer<K> {
    id: TimerId,
    due: Duration,
    kind: K,
}

/// Cancellable one-shot timers on the host's clock.
///
/// The queue never reads a clock itself: callers pass `now` to [`TimerQueue::pop_due`].
/// Cancelled timers are removed, not flagged, so they can never fire.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerQueue<K> {
    next_id: u64,
    timers: Vec<Timer<K>>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            next_id: 1,
            timers: Vec::new(),
        }
    }
}

impl<K> TimerQueue<K> {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at clock time `due`.
    pub fn schedule(&mut self, due: Duration, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { id, due, kind });
        id
    }

    /// Cancel one timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel everything; returns how many timers were pending.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.timers.len();
        self.timers.clear();
        n
    }

    /// Remove and return every timer due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<(TimerId, K)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.timers.len() {
            if self.timers[i].due <= now {
                due.push(self.timers.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| (t.id, t.kind)).collect()
    }

    /// Earliest pending due time.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/timer.rs"]
mod tests;
