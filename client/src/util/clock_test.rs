use super::*;

#[test]
fn delay_until_rounds_up() {
    assert_eq!(delay_until(100.4, 100.0), 1);
    assert_eq!(delay_until(600.0, 100.0), 500);
}

#[test]
fn delay_until_past_deadline_is_zero() {
    assert_eq!(delay_until(100.0, 100.0), 0);
    assert_eq!(delay_until(50.0, 100.0), 0);
    assert_eq!(delay_until(f64::NAN, 0.0), 0);
}

#[test]
fn delay_until_saturates() {
    assert_eq!(delay_until(f64::MAX, 0.0), u32::MAX);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
