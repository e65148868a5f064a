use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn holds_from_during_delay_then_reaches_to() {
    let t = Tween::new(0.0, 10.0, ms(100), ms(200), Ease::Linear).with_delay(ms(50));
    assert_eq!(t.sample(ms(0)), 0.0);
    assert_eq!(t.sample(ms(150)), 0.0);
    assert_eq!(t.sample(ms(250)), 5.0);
    assert_eq!(t.sample(ms(350)), 10.0);
    assert_eq!(t.end(), ms(350));
    assert!(!t.is_finished(ms(349)));
    assert!(t.is_finished(ms(350)));
}

#[test]
fn zero_duration_jumps() {
    let t = Tween::new(1.0, 2.0, ms(10), Duration::ZERO, Ease::OutCubic);
    assert_eq!(t.sample(ms(10)), 2.0);
    assert_eq!(t.progress(ms(9)), 0.0);
}

#[test]
fn easing_is_applied() {
    let t = Tween::new(0.0, 1.0, Duration::ZERO, ms(100), Ease::OutCubic);
    let v = t.sample(ms(50));
    assert!((v - Ease::OutCubic.apply(0.5)).abs() < 1e-12);
}
