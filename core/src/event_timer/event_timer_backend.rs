use std::fmt::Debug;
use std::time::Duration;

use crate::event_timer::{EventTimerError, EventTimerHandle, TimerRegistry};

/// How timers are driven.
///
/// The per-timer operations receive the registry so a backend can reconcile every timer at once. All of them
/// fail with [`EventTimerError::UnknownTimer`] when the handle does not name a live timer.
pub trait EventTimerBackend: Debug + Send + 'static {
  fn tick_period(&self) -> Duration;

  /// Starts the shared time base.
  fn start_backend(&mut self) -> Result<(), EventTimerError>;

  /// Stops the shared time base. Timer state is left as it is.
  fn shutdown_backend(&mut self);

  /// Arms (or rearms) a timer for `interval` seconds.
  fn start(
    &mut self,
    timers: &mut TimerRegistry,
    handle: EventTimerHandle,
    interval: f64,
  ) -> Result<(), EventTimerError>;

  fn stop(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError>;

  fn reset(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError>;

  /// Called once, right before the timer is removed from the registry.
  fn shutdown(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError>;

  fn is_running(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<bool, EventTimerError>;

  /// Returns whether the timer expired since the last call, and clears that state.
  ///
  /// Not idempotent: a second call without an intervening tick returns `false`.
  fn is_expired(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<bool, EventTimerError>;
}
