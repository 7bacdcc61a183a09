use std::time::Duration;

use crate::event_timer::{
  ticks_for_interval, Config, EventTimerBackend, EventTimerError, EventTimerHandle, TickSource, TimerEntry,
  TimerRegistry,
};


/// Backend that counts every timer down in whole ticks of one shared [`TickSource`].
///
/// Nothing happens when a tick arrives besides the counter increment. The counter is applied to the whole
/// registry by the next `is_running`/`is_expired` query on any timer, so every timer in that pass sees the
/// same number of elapsed ticks.
#[derive(Debug)]
pub struct IntervalTimerBackend<S> {
  tick_period: Duration,
  source: S,
}

impl<S: TickSource> IntervalTimerBackend<S> {
  pub fn new(tick_period: Duration, source: S) -> Self {
    Self { tick_period, source }
  }

  pub fn from_config(config: &Config, source: S) -> Self {
    Self::new(config.tick_period, source)
  }

  pub fn tick_source(&self) -> &S {
    &self.source
  }

  /// Applies the ticks accumulated since the previous pass to every armed timer.
  pub fn update(&self, timers: &mut TimerRegistry) {
    let counter = self.source.elapsed_ticks();
    let elapsed = counter.load();
    if elapsed == 0 {
      return;
    }

    let delta = i64::try_from(elapsed).unwrap_or(i64::MAX);
    timers.for_each_mut(|_, timer| {
      if timer.advance(delta) {
        tracing::debug!(
          "TimerUpdate: timer {} has now expired, re-armed with interval {}",
          timer.id(),
          timer.period_ticks()
        );
      }
    });

    counter.consume(elapsed);
  }

  fn entry_mut(timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<&mut TimerEntry, EventTimerError> {
    timers
      .get_mut(handle.key())
      .ok_or(EventTimerError::UnknownTimer(handle))
  }
}

impl<S: TickSource> EventTimerBackend for IntervalTimerBackend<S> {
  fn tick_period(&self) -> Duration {
    self.tick_period
  }

  fn start_backend(&mut self) -> Result<(), EventTimerError> {
    self.source.elapsed_ticks().clear();
    self.source.arm_periodic(self.tick_period)?;
    tracing::info!("IntervalTimerBackend: ticking every {:?}", self.tick_period);
    Ok(())
  }

  fn shutdown_backend(&mut self) {
    self.source.disarm();
    tracing::debug!("IntervalTimerBackend: tick source disarmed");
  }

  fn start(
    &mut self,
    timers: &mut TimerRegistry,
    handle: EventTimerHandle,
    interval: f64,
  ) -> Result<(), EventTimerError> {
    let ticks = ticks_for_interval(interval, self.tick_period)?;
    let timer = Self::entry_mut(timers, handle)?;
    timer.arm(ticks);
    tracing::debug!(
      "timerStart: set timer {} to {}, interval {} ticks",
      timer.id(),
      interval,
      ticks
    );
    Ok(())
  }

  fn stop(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError> {
    let timer = Self::entry_mut(timers, handle)?;
    timer.disarm();
    tracing::debug!("timerStop: stopping timer {}", timer.id());
    Ok(())
  }

  fn reset(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError> {
    Self::entry_mut(timers, handle).map(|_| ())
  }

  fn shutdown(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<(), EventTimerError> {
    Self::entry_mut(timers, handle).map(|_| ())
  }

  fn is_running(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<bool, EventTimerError> {
    self.update(timers);
    let timer = Self::entry_mut(timers, handle)?;
    let running = timer.is_running();
    tracing::trace!(
      "timerIsRunning: timer {} {} running",
      timer.id(),
      if running { "is" } else { "is not" }
    );
    Ok(running)
  }

  fn is_expired(&mut self, timers: &mut TimerRegistry, handle: EventTimerHandle) -> Result<bool, EventTimerError> {
    self.update(timers);
    let timer = Self::entry_mut(timers, handle)?;
    let expired = timer.take_expired();
    tracing::trace!(
      "timerIsExpired: timer {} {} expired",
      timer.id(),
      if expired { "is" } else { "is not" }
    );
    Ok(expired)
  }
}
