mod tick_counter;

pub use self::tick_counter::*;
