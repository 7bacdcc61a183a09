use std::time::Duration;

use crate::event_timer::{
  Config, EventTimerBackend, EventTimerError, EventTimerHandle, IntervalTimerBackend, ManualTickSource, TickSource,
  TimerEntry, TimerId, TimerRegistry, TokioTickSource,
};

#[cfg(test)]
mod tests;

/// All timers of one timer domain, together with the backend that drives them.
///
/// Every operation runs synchronously in the caller. Polling (`is_running`, `is_expired`) is what brings
/// timers up to date, so a consumer is expected to poll each active timer once per iteration of its own
/// loop.
#[derive(Debug)]
pub struct EventTimers<B: EventTimerBackend> {
  config: Config,
  registry: TimerRegistry,
  backend: B,
}

impl EventTimers<IntervalTimerBackend<TokioTickSource>> {
  /// Timers ticking on a task of the current tokio runtime. Ticks start with
  /// [`EventTimers::start_timer_subsystem`].
  pub fn from_current_runtime(config: Config) -> Result<Self, EventTimerError> {
    let source = TokioTickSource::from_current()?;
    Ok(Self::with_tick_source(config, source))
  }
}

impl EventTimers<IntervalTimerBackend<ManualTickSource>> {
  /// Timers ticking only when the returned source is told to.
  pub fn manual(config: Config) -> (Self, ManualTickSource) {
    let source = ManualTickSource::new();
    (Self::with_tick_source(config, source.clone()), source)
  }
}

impl<S: TickSource> EventTimers<IntervalTimerBackend<S>> {
  pub fn with_tick_source(config: Config, source: S) -> Self {
    let backend = IntervalTimerBackend::from_config(&config, source);
    Self::new(config, backend)
  }
}

impl<B: EventTimerBackend> EventTimers<B> {
  pub fn new(config: Config, backend: B) -> Self {
    let registry = match config.max_timers {
      Some(limit) => TimerRegistry::with_limit(limit),
      None => TimerRegistry::new(),
    };
    Self {
      config,
      registry,
      backend,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn registry(&self) -> &TimerRegistry {
    &self.registry
  }

  pub fn tick_period(&self) -> Duration {
    self.backend.tick_period()
  }

  pub fn len(&self) -> usize {
    self.registry.len()
  }

  pub fn is_empty(&self) -> bool {
    self.registry.is_empty()
  }

  /// Ids of all live timers in registry order.
  pub fn ids(&self) -> Vec<&TimerId> {
    self.registry.iter().map(|(_, timer)| timer.id()).collect()
  }

  /// Starts delivering ticks. Ticks counted before this call are discarded.
  pub fn start_timer_subsystem(&mut self) -> Result<(), EventTimerError> {
    tracing::debug!("EventTimers: starting timer subsystem");
    self.backend.start_backend()
  }

  /// Stops delivering ticks. Timers keep their state but no longer advance.
  pub fn shutdown_timer_subsystem(&mut self) {
    self.backend.shutdown_backend();
    tracing::info!("EventTimers: timer subsystem shut down with {} timers", self.registry.len());
  }

  /// Registers a disarmed timer at the end of the registry.
  pub fn create(&mut self, id: &str) -> Result<EventTimerHandle, EventTimerError> {
    let id = TimerId::new(id, self.config.max_id_len);
    let key = self.registry.push_back(TimerEntry::new(id.clone()))?;
    tracing::debug!("EventTimers: created event timer {}", id);
    Ok(EventTimerHandle::new(key))
  }

  /// Runs the backend's shutdown hook, removes the timer and clears `handle`.
  ///
  /// Does nothing when `handle` is `None` or names a timer that is already gone.
  pub fn destroy(&mut self, handle: &mut Option<EventTimerHandle>) {
    let Some(target) = handle.take() else {
      return;
    };
    if !self.registry.contains(target.key()) {
      return;
    }
    if let Err(err) = self.backend.shutdown(&mut self.registry, target) {
      tracing::warn!("EventTimers: shutdown hook of {} failed: {}", target, err);
    }
    if let Some(timer) = self.registry.remove(target.key()) {
      tracing::debug!("EventTimers: destroyed event timer {}", timer.id());
    }
  }

  pub fn start(&mut self, handle: EventTimerHandle, interval: f64) -> Result<(), EventTimerError> {
    self.backend.start(&mut self.registry, handle, interval)
  }

  pub fn stop(&mut self, handle: EventTimerHandle) -> Result<(), EventTimerError> {
    self.backend.stop(&mut self.registry, handle)
  }

  pub fn reset(&mut self, handle: EventTimerHandle) -> Result<(), EventTimerError> {
    self.backend.reset(&mut self.registry, handle)
  }

  pub fn is_running(&mut self, handle: EventTimerHandle) -> Result<bool, EventTimerError> {
    self.backend.is_running(&mut self.registry, handle)
  }

  /// Consumes a pending expiry of the timer. See [`EventTimerBackend::is_expired`].
  pub fn is_expired(&mut self, handle: EventTimerHandle) -> Result<bool, EventTimerError> {
    self.backend.is_expired(&mut self.registry, handle)
  }

  pub fn timer(&self, handle: EventTimerHandle) -> Option<&TimerEntry> {
    self.registry.get(handle.key())
  }

  pub fn id(&self, handle: EventTimerHandle) -> Option<&TimerId> {
    self.timer(handle).map(TimerEntry::id)
  }
}

static_assertions::assert_impl_all!(EventTimers<IntervalTimerBackend<TokioTickSource>>: Send);
static_assertions::assert_impl_all!(EventTimers<IntervalTimerBackend<ManualTickSource>>: Send);
