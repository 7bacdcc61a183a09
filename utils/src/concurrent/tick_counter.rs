use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;


/// A tick count shared between a periodic callback and the code that consumes it.<br/>
/// 周期コールバックと、それを消費するコードとの間で共有されるティック数。
///
/// The callback side only ever calls [`TickCounter::increment`]. The consuming side reads the count with
/// [`TickCounter::load`] and, once it has applied those ticks, gives them back with
/// [`TickCounter::consume`]. Increments that arrive in between stay in the counter.<br/>
/// コールバック側は [`TickCounter::increment`] のみを呼ぶ。消費側は [`TickCounter::load`] で値を読み、
/// 適用し終えたら [`TickCounter::consume`] で差し引く。その間に到着した加算はカウンタに残る。
#[derive(Debug, Clone, Default)]
pub struct TickCounter {
  elapsed: Arc<AtomicU64>,
}

impl TickCounter {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn increment(&self) {
    self.elapsed.fetch_add(1, Ordering::SeqCst);
  }

  #[inline]
  pub fn load(&self) -> u64 {
    self.elapsed.load(Ordering::SeqCst)
  }

  /// Subtracts ticks that were read by [`TickCounter::load`] and have been applied.<br/>
  /// [`TickCounter::load`] で読み取り、適用済みのティックを差し引きます。
  ///
  /// # Return Value / 戻り値
  /// - The ticks left for the next pass. / 次のパスに持ち越されるティック数。
  #[inline]
  pub fn consume(&self, ticks: u64) -> u64 {
    // the update closure always returns `Some`, so both arms carry the previous value
    match self
      .elapsed
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
        Some(current.saturating_sub(ticks))
      }) {
      Ok(previous) | Err(previous) => previous.saturating_sub(ticks),
    }
  }

  pub fn clear(&self) {
    self.elapsed.store(0, Ordering::SeqCst);
  }

  /// Returns whether both counters share the same storage.<br/>
  /// 二つのカウンタが同じ領域を共有しているかどうかを返します。
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.elapsed, &other.elapsed)
  }
}

static_assertions::assert_impl_all!(TickCounter: Send, Sync);
