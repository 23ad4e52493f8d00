pub mod hours;
pub mod progress;
