use std::env;

use tracing_subscriber::EnvFilter;

use crate::event_timer::{Config, ConfigOption, EventTimerError, EventTimers, TickSource};

fn init_tracing() {
  env::set_var("RUST_LOG", "debug");
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .try_init();
}

#[test]
fn test_scenario_one_second_is_sixteen_ticks() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let t = timers.create("SYNC_INTERVAL").unwrap();
  timers.start(t, 1.0).unwrap();
  assert_eq!(timers.timer(t).unwrap().period_ticks(), 16);

  source.advance(15);
  assert!(!timers.is_expired(t).unwrap());
  assert!(timers.is_running(t).unwrap());

  source.tick();
  assert!(timers.is_expired(t).unwrap());
  assert!(!timers.is_expired(t).unwrap());
  assert_eq!(timers.timer(t).unwrap().remaining_ticks(), 16);
}

#[test]
fn test_scenario_sub_tick_interval_expires_on_first_tick() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let t = timers.create("PDELAYREQ_INTERVAL").unwrap();
  timers.start(t, 0.00001).unwrap();
  assert_eq!(timers.timer(t).unwrap().period_ticks(), 1);

  assert!(!timers.is_expired(t).unwrap());
  source.tick();
  assert!(timers.is_expired(t).unwrap());
  source.tick();
  assert!(timers.is_expired(t).unwrap());
}

#[test]
fn test_equal_periods_expire_in_the_same_pass() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let a = timers.create("a").unwrap();
  let b = timers.create("b").unwrap();
  timers.start(a, 0.5).unwrap();
  timers.start(b, 0.5).unwrap();

  source.advance(8);
  assert!(timers.is_expired(a).unwrap());
  assert!(timers.timer(b).unwrap().is_expiry_pending());
  assert!(timers.is_expired(b).unwrap());
  assert!(!timers.is_expired(b).unwrap());
}

#[test]
fn test_stopped_timer_never_expires() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let t = timers.create("ANNOUNCE_RECEIPT").unwrap();
  timers.start(t, 0.125).unwrap();
  timers.stop(t).unwrap();

  for _ in 0..50 {
    source.tick();
    assert!(!timers.is_expired(t).unwrap());
  }
  assert!(!timers.is_running(t).unwrap());
}

#[test]
fn test_restart_after_stop_counts_from_full_period() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let t = timers.create("t").unwrap();
  timers.start(t, 0.25).unwrap();
  source.advance(3);
  assert!(!timers.is_expired(t).unwrap());
  timers.stop(t).unwrap();

  timers.start(t, 0.25).unwrap();
  source.advance(3);
  assert!(!timers.is_expired(t).unwrap());
  source.tick();
  assert!(timers.is_expired(t).unwrap());
}

#[test]
fn test_create_truncates_id_and_appends_in_order() {
  init_tracing();
  let (mut timers, _source) = EventTimers::manual(Config::from([ConfigOption::with_max_id_len(8)]));
  let a = timers.create("MASTER_NETREFRESH").unwrap();
  timers.create("SYNC").unwrap();

  assert_eq!(timers.id(a).unwrap().as_str(), "MASTER_N");
  let ids = timers.ids().into_iter().map(|id| id.to_string()).collect::<Vec<_>>();
  assert_eq!(ids, vec!["MASTER_N", "SYNC"]);
  assert_eq!(timers.len(), 2);
}

#[test]
fn test_create_fails_when_limit_is_reached() {
  init_tracing();
  let (mut timers, _source) = EventTimers::manual(Config::from([ConfigOption::with_max_timers(1)]));
  let mut first = Some(timers.create("first").unwrap());
  assert_eq!(timers.create("second"), Err(EventTimerError::CapacityExceeded(1)));

  timers.destroy(&mut first);
  assert!(timers.create("second").is_ok());
}

#[test]
fn test_destroy_clears_handle_and_is_idempotent() {
  init_tracing();
  let (mut timers, _source) = EventTimers::manual(Config::default());
  let t = timers.create("t").unwrap();
  let mut handle = Some(t);

  timers.destroy(&mut handle);
  assert!(handle.is_none());
  assert!(timers.is_empty());

  timers.destroy(&mut handle);
  let mut stale = Some(t);
  timers.destroy(&mut stale);
  assert!(stale.is_none());
  assert!(timers.is_empty());
}

#[test]
fn test_destroyed_handle_is_rejected() {
  init_tracing();
  let (mut timers, _source) = EventTimers::manual(Config::default());
  let t = timers.create("t").unwrap();
  timers.destroy(&mut Some(t));
  timers.create("reuses_slot").unwrap();

  assert_eq!(timers.start(t, 1.0), Err(EventTimerError::UnknownTimer(t)));
  assert_eq!(timers.is_expired(t), Err(EventTimerError::UnknownTimer(t)));
  assert!(timers.timer(t).is_none());
}

#[test]
fn test_destroying_head_keeps_later_timers_updating() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let head = timers.create("head").unwrap();
  let second = timers.create("second").unwrap();
  let third = timers.create("third").unwrap();
  timers.start(second, 0.125).unwrap();
  timers.start(third, 0.125).unwrap();

  timers.destroy(&mut Some(head));
  source.advance(2);

  assert!(timers.is_expired(third).unwrap());
  assert!(timers.is_expired(second).unwrap());
}

#[test]
fn test_shutdown_timer_subsystem_freezes_state() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  timers.start_timer_subsystem().unwrap();
  let t = timers.create("t").unwrap();
  timers.start(t, 0.125).unwrap();
  source.tick();

  timers.shutdown_timer_subsystem();
  assert!(!timers.backend().tick_source().is_armed());
  source.advance(10);

  assert!(!timers.is_expired(t).unwrap());
  assert_eq!(timers.timer(t).unwrap().remaining_ticks(), 1);
}

#[test]
fn test_ticks_before_subsystem_start_are_ignored() {
  init_tracing();
  let (mut timers, source) = EventTimers::manual(Config::default());
  let t = timers.create("t").unwrap();
  timers.start(t, 0.00001).unwrap();

  source.advance(5);
  assert!(!timers.is_expired(t).unwrap());

  timers.start_timer_subsystem().unwrap();
  source.tick();
  assert!(timers.is_expired(t).unwrap());
}
