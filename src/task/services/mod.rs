//! Application services for the task collection.

mod activity;
mod config;
mod store;
mod writer;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog};
pub use config::{ConfigError, StoreConfig};
pub use store::{LoadPhase, TaskStore};
