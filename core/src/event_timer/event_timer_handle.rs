use std::fmt::{Display, Formatter};

use ptpd_timer_utils_rs::collections::IndexedListKey;

/// Opaque handle of a timer created by [`EventTimers::create`](crate::event_timer::EventTimers::create).
///
/// Handles are never reused: once a timer is destroyed, its handle is rejected by every operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EventTimerHandle(IndexedListKey);

impl EventTimerHandle {
  pub(crate) fn new(key: IndexedListKey) -> Self {
    Self(key)
  }

  pub(crate) fn key(self) -> IndexedListKey {
    self.0
  }
}

impl Display for EventTimerHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "EventTimerHandle({}:{})", self.0.slot(), self.0.serial())
  }
}
