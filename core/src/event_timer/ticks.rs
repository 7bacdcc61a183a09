use std::time::Duration;

use crate::event_timer::EventTimerError;

#[cfg(test)]
mod tests;

/// Converts an interval in seconds to whole ticks, rounding down.
///
/// A non-negative interval shorter than one tick becomes one tick, so it still expires on the next tick.
pub fn ticks_for_interval(interval: f64, tick_period: Duration) -> Result<i64, EventTimerError> {
  if !interval.is_finite() || interval < 0.0 {
    return Err(EventTimerError::InvalidInterval(interval));
  }
  if tick_period.is_zero() {
    return Err(EventTimerError::InvalidTickPeriod(tick_period));
  }
  let tick_micros = tick_period.as_nanos() as f64 / 1_000.0;
  let ticks = (interval * 1e6 / tick_micros).floor() as i64;
  Ok(ticks.max(1))
}
