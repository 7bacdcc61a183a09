use std::env;
use std::time::Duration;

use ptpd_event_timer_rs::{Config, EventTimerError, EventTimers};
use tokio::time::{sleep, Instant};
use tracing_subscriber::EnvFilter;

const SYNC_INTERVAL: f64 = 0.5;
const ANNOUNCE_INTERVAL: f64 = 1.0;
const ANNOUNCE_RECEIPT_TIMEOUT: f64 = 3.0;
const RUN_FOR: Duration = Duration::from_secs(8);

#[tokio::main]
async fn main() -> Result<(), EventTimerError> {
  env::set_var("RUST_LOG", "ptp_port_timers=info,ptpd_event_timer_rs=debug");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();

  let mut timers = EventTimers::from_current_runtime(Config::default())?;
  timers.start_timer_subsystem()?;

  let mut sync = Some(timers.create("SYNC_INTERVAL")?);
  let mut announce = Some(timers.create("ANNOUNCE_INTERVAL")?);
  let mut receipt = Some(timers.create("ANNOUNCE_RECEIPT")?);

  if let (Some(sync), Some(announce), Some(receipt)) = (sync, announce, receipt) {
    timers.start(sync, SYNC_INTERVAL)?;
    timers.start(announce, ANNOUNCE_INTERVAL)?;
    timers.start(receipt, ANNOUNCE_RECEIPT_TIMEOUT)?;

    let started = Instant::now();
    let mut announces_heard = 0;
    while started.elapsed() < RUN_FOR {
      if timers.is_expired(sync)? {
        tracing::info!("sending Sync at {:?}", started.elapsed());
      }
      if timers.is_expired(announce)? {
        tracing::info!("sending Announce at {:?}", started.elapsed());
        // the foreign master goes quiet after a few announces
        if announces_heard < 3 {
          announces_heard += 1;
          timers.start(receipt, ANNOUNCE_RECEIPT_TIMEOUT)?;
        }
      }
      if timers.is_expired(receipt)? {
        tracing::info!("announce receipt timeout at {:?}, re-running BMC", started.elapsed());
        timers.stop(receipt)?;
      }
      sleep(Duration::from_millis(10)).await;
    }
  }

  timers.destroy(&mut sync);
  timers.destroy(&mut announce);
  timers.destroy(&mut receipt);
  timers.shutdown_timer_subsystem();
  Ok(())
}
