mod average;
mod duration;
mod error;

pub use average::average_interval;
pub use duration::format_seconds;
pub use error::StatsError;
