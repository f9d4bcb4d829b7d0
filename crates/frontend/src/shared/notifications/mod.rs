pub mod indicator;
pub mod poll_policy;

pub use indicator::NotificationIndicator;
pub use poll_policy::PollPolicy;
