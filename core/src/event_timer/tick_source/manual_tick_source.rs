use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ptpd_timer_utils_rs::concurrent::TickCounter;

use crate::event_timer::{EventTimerError, TickSource};

/// Tick source driven by explicit calls, for simulations and tests.
///
/// Clones share the counter and the armed state, so a clone kept outside the timers can deliver ticks.
#[derive(Debug, Clone, Default)]
pub struct ManualTickSource {
  counter: TickCounter,
  armed: Arc<AtomicBool>,
}

impl ManualTickSource {
  pub fn new() -> Self {
    Self::default()
  }

  /// Delivers one tick. Ignored while disarmed.
  pub fn tick(&self) {
    if self.armed.load(Ordering::SeqCst) {
      self.counter.increment();
    }
  }

  pub fn advance(&self, ticks: u64) {
    for _ in 0..ticks {
      self.tick();
    }
  }
}

impl TickSource for ManualTickSource {
  fn elapsed_ticks(&self) -> &TickCounter {
    &self.counter
  }

  fn arm_periodic(&mut self, tick_period: Duration) -> Result<(), EventTimerError> {
    if tick_period.is_zero() {
      return Err(EventTimerError::InvalidTickPeriod(tick_period));
    }
    self.armed.store(true, Ordering::SeqCst);
    Ok(())
  }

  fn disarm(&mut self) {
    self.armed.store(false, Ordering::SeqCst);
  }

  fn is_armed(&self) -> bool {
    self.armed.load(Ordering::SeqCst)
  }
}
