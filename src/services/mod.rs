pub mod activity_logger;
pub mod reports;

pub use activity_logger::{Action, ActivityLogger};
