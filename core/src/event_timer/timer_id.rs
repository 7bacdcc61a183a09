use std::fmt::{Display, Formatter};

/// Diagnostic name of a timer. Not a lookup key; two timers may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TimerId(String);

impl TimerId {
  /// Copies at most `max_len` characters of `id`.
  pub fn new(id: &str, max_len: usize) -> Self {
    Self(id.chars().take(max_len).collect())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for TimerId {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl Display for TimerId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_short_id_is_kept() {
    assert_eq!(TimerId::new("SYNC_INTERVAL", 20).as_str(), "SYNC_INTERVAL");
  }

  #[test]
  fn test_long_id_is_truncated() {
    let id = TimerId::new("ANNOUNCE_RECEIPT_TIMEOUT", 20);
    assert_eq!(id.as_str(), "ANNOUNCE_RECEIPT_TIM");
    assert_eq!(id.to_string().chars().count(), 20);
  }

  #[test]
  fn test_truncation_respects_char_boundaries() {
    assert_eq!(TimerId::new("タイマー同期", 4).as_str(), "タイマー");
  }
}
