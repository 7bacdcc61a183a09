use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::event_timer::ConfigOption;


pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_micros(62_500);
pub const DEFAULT_MAX_ID_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Period of the shared tick. Every timer interval is rounded down to a whole number of these.
  #[serde(rename = "tick_period_us", with = "duration_micros")]
  pub tick_period: Duration,
  /// Timer ids longer than this many characters are truncated.
  pub max_id_len: usize,
  pub max_timers: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      tick_period: DEFAULT_TICK_PERIOD,
      max_id_len: DEFAULT_MAX_ID_LEN,
      max_timers: None,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }
}

mod duration_micros {
  use std::time::Duration;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer, {
    serializer.serialize_u64(u64::try_from(value.as_micros()).unwrap_or(u64::MAX))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
  where
    D: Deserializer<'de>, {
    u64::deserialize(deserializer).map(Duration::from_micros)
  }
}
