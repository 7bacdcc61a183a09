//! Software event timers for a PTP daemon.
//!
//! Any number of named interval timers share one periodic tick. The tick context only bumps a counter;
//! the counter is reconciled against every armed timer lazily, whenever a timer is polled.

pub mod event_timer;

pub use event_timer::*;
