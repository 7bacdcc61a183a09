mod config;
mod config_option;
mod event_timer_backend;
mod event_timer_error;
mod event_timer_handle;
mod event_timers;
mod interval_timer_backend;
mod tick_source;
mod ticks;
mod timer_entry;
mod timer_id;
mod timer_registry;

pub use self::{
  config::*, config_option::*, event_timer_backend::*, event_timer_error::*, event_timer_handle::*, event_timers::*,
  interval_timer_backend::*, tick_source::*, ticks::*, timer_entry::*, timer_id::*, timer_registry::*,
};
