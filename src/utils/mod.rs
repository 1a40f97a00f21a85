mod class_names;
mod clock;

pub use class_names::{ class_if, class_names };
pub use clock::{ ms_until_next_minute, sleep_ms };
