use std::time::Duration;

use rstest::rstest;

use crate::event_timer::{ticks_for_interval, EventTimerError, DEFAULT_TICK_PERIOD};

#[rstest]
#[case(1.0, 16)]
#[case(2.0, 32)]
#[case(0.5, 8)]
#[case(0.125, 2)]
#[case(0.1, 1)]
#[case(0.0624, 1)]
#[case(0.00001, 1)]
#[case(0.0, 1)]
fn test_ticks_for_interval_with_default_tick(#[case] interval: f64, #[case] expected: i64) {
  assert_eq!(ticks_for_interval(interval, DEFAULT_TICK_PERIOD), Ok(expected));
}

#[rstest]
#[case(1.0, 1_000)]
#[case(0.25, 250)]
#[case(0.0001, 1)]
fn test_ticks_for_interval_with_millisecond_tick(#[case] interval: f64, #[case] expected: i64) {
  assert_eq!(ticks_for_interval(interval, Duration::from_millis(1)), Ok(expected));
}

#[rstest]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn test_ticks_for_interval_rejects_invalid_interval(#[case] interval: f64) {
  assert!(matches!(
    ticks_for_interval(interval, DEFAULT_TICK_PERIOD),
    Err(EventTimerError::InvalidInterval(_))
  ));
}

#[test]
fn test_ticks_for_interval_rejects_zero_tick_period() {
  assert_eq!(
    ticks_for_interval(1.0, Duration::ZERO),
    Err(EventTimerError::InvalidTickPeriod(Duration::ZERO))
  );
}
