use std::time::Duration;

use ptpd_timer_utils_rs::concurrent::TickCounter;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::event_timer::{EventTimerError, TickSource};


/// Tick source backed by a task on a tokio runtime.
///
/// Missed ticks are delivered in a burst once the task runs again, so none are dropped.
#[derive(Debug)]
pub struct TokioTickSource {
  counter: TickCounter,
  runtime: Handle,
  task: Option<JoinHandle<()>>,
}

impl TokioTickSource {
  pub fn new(runtime: Handle) -> Self {
    Self {
      counter: TickCounter::new(),
      runtime,
      task: None,
    }
  }

  /// Binds to the runtime of the calling context.
  pub fn from_current() -> Result<Self, EventTimerError> {
    Handle::try_current()
      .map(Self::new)
      .map_err(|_| EventTimerError::RuntimeUnavailable)
  }
}

impl TickSource for TokioTickSource {
  fn elapsed_ticks(&self) -> &TickCounter {
    &self.counter
  }

  fn arm_periodic(&mut self, tick_period: Duration) -> Result<(), EventTimerError> {
    if tick_period.is_zero() {
      return Err(EventTimerError::InvalidTickPeriod(tick_period));
    }
    self.disarm();

    let counter = self.counter.clone();
    let task = self.runtime.spawn(async move {
      let mut ticker = interval_at(Instant::now() + tick_period, tick_period);
      loop {
        ticker.tick().await;
        counter.increment();
      }
    });
    self.task = Some(task);
    Ok(())
  }

  fn disarm(&mut self) {
    if let Some(task) = self.task.take() {
      task.abort();
    }
  }

  fn is_armed(&self) -> bool {
    self.task.as_ref().is_some_and(|task| !task.is_finished())
  }
}

impl Drop for TokioTickSource {
  fn drop(&mut self) {
    self.disarm();
  }
}

static_assertions::assert_impl_all!(TokioTickSource: Send, Sync);
