use std::time::Duration;

use crate::event_timer::Config;

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetTickPeriod(Duration),
  SetMaxIdLen(usize),
  SetMaxTimers(usize),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetTickPeriod(tick_period) => {
        config.tick_period = *tick_period;
      }
      ConfigOption::SetMaxIdLen(max_id_len) => {
        config.max_id_len = *max_id_len;
      }
      ConfigOption::SetMaxTimers(max_timers) => {
        config.max_timers = Some(*max_timers);
      }
    }
  }

  pub fn with_tick_period(tick_period: Duration) -> ConfigOption {
    ConfigOption::SetTickPeriod(tick_period)
  }

  pub fn with_max_id_len(max_id_len: usize) -> ConfigOption {
    ConfigOption::SetMaxIdLen(max_id_len)
  }

  pub fn with_max_timers(max_timers: usize) -> ConfigOption {
    ConfigOption::SetMaxTimers(max_timers)
  }
}
