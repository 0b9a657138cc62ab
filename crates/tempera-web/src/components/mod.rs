mod temperature;

pub use temperature::{display_text, Action, Temperature, UNIT_SYMBOL};
