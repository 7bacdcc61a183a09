use crate::event_timer::TimerId;

/// State of one logical timer, counted in ticks.
///
/// A period of zero means the timer is disarmed. `remaining` only matters while armed. The expired flag
/// is latched by [`TimerEntry::advance`] and cleared by [`TimerEntry::take_expired`]; backends are the only
/// intended writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEntry {
  id: TimerId,
  period: i64,
  remaining: i64,
  running: bool,
  expired: bool,
}

impl TimerEntry {
  pub fn new(id: TimerId) -> Self {
    Self {
      id,
      period: 0,
      remaining: 0,
      running: false,
      expired: false,
    }
  }

  pub fn id(&self) -> &TimerId {
    &self.id
  }

  pub fn period_ticks(&self) -> i64 {
    self.period
  }

  pub fn remaining_ticks(&self) -> i64 {
    self.remaining
  }

  pub fn is_armed(&self) -> bool {
    self.period > 0
  }

  pub fn is_running(&self) -> bool {
    self.running
  }

  pub fn is_expiry_pending(&self) -> bool {
    self.expired
  }

  pub fn arm(&mut self, ticks: i64) {
    self.period = ticks;
    self.remaining = ticks;
    self.running = true;
    self.expired = false;
  }

  pub fn disarm(&mut self) {
    self.period = 0;
    self.running = false;
  }

  /// Applies `elapsed` ticks. Returns `true` when the timer crossed zero in this call, in which case it
  /// has been rearmed with its full period and the expired flag is latched. Overshoot is dropped.
  pub fn advance(&mut self, elapsed: i64) -> bool {
    if !self.is_armed() {
      return false;
    }
    self.remaining = self.remaining.saturating_sub(elapsed);
    if self.remaining <= 0 {
      self.remaining = self.period;
      self.expired = true;
      true
    } else {
      false
    }
  }

  pub fn take_expired(&mut self) -> bool {
    std::mem::replace(&mut self.expired, false)
  }
}
