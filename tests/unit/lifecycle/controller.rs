use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn missing() -> BindOutcome {
    BindOutcome::TargetMissing {
        missing: vec!["lg-map".to_string()],
    }
}

#[test]
fn mount_enters_binding_pending_once() {
    let mut c = LifecycleController::new("t", RetryPolicy::default());
    assert_eq!(c.state(), LifecycleState::Uninitialized);
    assert!(c.mount());
    assert_eq!(c.state(), LifecycleState::BindingPending { attempts: 0 });
    assert!(!c.mount());
}

#[test]
fn missing_target_schedules_retry_after_delay() {
    let mut c = LifecycleController::new("t", RetryPolicy::default());
    c.mount();
    let p = c.record_bind(&missing(), ms(0));
    assert_eq!(p, BindProgress::Retrying { attempt: 1, at: ms(50) });
    assert_eq!(c.pending_timers(), 1);
    assert!(!c.poll_retry(ms(49)));
    assert!(c.poll_retry(ms(50)));
    assert_eq!(c.pending_timers(), 0);
}

#[test]
fn successful_bind_becomes_ready_and_cancels_retry() {
    let mut c = LifecycleController::new("t", RetryPolicy::default());
    c.mount();
    c.record_bind(&missing(), ms(0));
    assert_eq!(c.record_bind(&BindOutcome::Bound, ms(10)), BindProgress::BecameReady);
    assert!(c.is_ready());
    assert_eq!(c.pending_timers(), 0);
    assert_eq!(c.record_bind(&BindOutcome::Bound, ms(20)), BindProgress::Unchanged);
}

#[test]
fn ready_stays_ready_when_rebind_fails() {
    let mut c = LifecycleController::new("t", RetryPolicy::default());
    c.mount();
    c.record_bind(&BindOutcome::Bound, ms(0));
    assert_eq!(c.record_bind(&missing(), ms(5)), BindProgress::Unchanged);
    assert_eq!(c.state(), LifecycleState::Ready);
    assert_eq!(c.pending_timers(), 0);
}

#[test]
fn bounded_policy_gives_up() {
    let policy = RetryPolicy {
        delay: ms(10),
        max_attempts: Some(3),
    };
    let mut c = LifecycleController::new("t", policy);
    c.mount();
    let mut now = ms(0);
    for attempt in 1..3 {
        assert!(matches!(
            c.record_bind(&missing(), now),
            BindProgress::Retrying { attempt: a, .. } if a == attempt
        ));
        now += ms(10);
        assert!(c.poll_retry(now));
    }
    assert_eq!(
        c.record_bind(&missing(), now),
        BindProgress::GaveUp { attempts: 3 }
    );
    assert_eq!(c.state(), LifecycleState::GaveUp { attempts: 3 });
    assert_eq!(c.pending_timers(), 0);

    assert_eq!(c.record_bind(&BindOutcome::Bound, now), BindProgress::BecameReady);
}

#[test]
fn unbounded_policy_keeps_retrying() {
    let mut c = LifecycleController::new("t", RetryPolicy::unbounded());
    c.mount();
    let mut now = ms(0);
    for _ in 0..1_000 {
        c.record_bind(&missing(), now);
        now += ms(50);
        assert!(c.poll_retry(now));
    }
    assert_eq!(c.state(), LifecycleState::BindingPending { attempts: 1_000 });
}

#[test]
fn destroy_cancels_timers_and_is_terminal() {
    let mut c = LifecycleController::new("t", RetryPolicy::default());
    c.mount();
    c.record_bind(&missing(), ms(0));
    assert_eq!(c.destroy(), Some(1));
    assert_eq!(c.destroy(), None);
    assert!(!c.poll_retry(ms(1_000)));
    assert_eq!(c.record_bind(&BindOutcome::Bound, ms(1_000)), BindProgress::Unchanged);
    assert_eq!(c.state(), LifecycleState::Destroyed);
}
