use std::fmt::Debug;
use std::time::Duration;

use ptpd_timer_utils_rs::concurrent::TickCounter;

use crate::event_timer::EventTimerError;

mod manual_tick_source;
mod tokio_tick_source;

pub use self::{manual_tick_source::*, tokio_tick_source::*};

/// The single periodic tick shared by all timers.
///
/// While armed, an implementation delivers one call to [`TickCounter::increment`] per tick and does
/// nothing else in that context: no allocation, no logging and no access to timer state.
pub trait TickSource: Debug + Send + 'static {
  /// Counter of ticks delivered and not yet consumed by an update pass.
  fn elapsed_ticks(&self) -> &TickCounter;

  /// Starts delivering ticks every `tick_period`. Arming an armed source restarts it with the new period.
  fn arm_periodic(&mut self, tick_period: Duration) -> Result<(), EventTimerError>;

  /// Stops delivering ticks. Ticks already counted stay in the counter.
  fn disarm(&mut self);

  fn is_armed(&self) -> bool;
}
