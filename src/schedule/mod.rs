mod runner;
mod state;

pub use runner::{Clock, Scheduler, SystemClock};
pub use state::{Branch, ScheduleConfig};
