use std::time::Duration;

use ptpd_timer_utils_rs::collections::IndexedListError;
use thiserror::Error;

use crate::event_timer::EventTimerHandle;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventTimerError {
  #[error("Unknown event timer: {0}")]
  UnknownTimer(EventTimerHandle),
  #[error("Failed to allocate an event timer")]
  AllocationFailed,
  #[error("Event timer limit reached: {0}")]
  CapacityExceeded(usize),
  #[error("Invalid timer interval: {0} seconds")]
  InvalidInterval(f64),
  #[error("Invalid tick period: {0:?}")]
  InvalidTickPeriod(Duration),
  #[error("No tokio runtime available to drive the tick source")]
  RuntimeUnavailable,
}

impl From<IndexedListError> for EventTimerError {
  fn from(value: IndexedListError) -> Self {
    match value {
      IndexedListError::CapacityExceeded(limit) => EventTimerError::CapacityExceeded(limit),
      IndexedListError::AllocationFailed => EventTimerError::AllocationFailed,
    }
  }
}

static_assertions::assert_impl_all!(EventTimerError: Send, Sync);
