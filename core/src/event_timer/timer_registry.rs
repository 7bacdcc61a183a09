use ptpd_timer_utils_rs::collections::IndexedList;

use crate::event_timer::TimerEntry;

/// Every live timer, in creation order. One update pass walks it head to tail.
pub type TimerRegistry = IndexedList<TimerEntry>;
