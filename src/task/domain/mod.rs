//! Domain model for revenue-tracked tasks.
//!
//! The task domain models the canonical task record, its creation and
//! update payloads, and the priority and status vocabularies, while keeping
//! persistence concerns outside of the domain boundary.

mod error;
mod ids;
mod payload;
mod priority;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use payload::{NewTask, TaskPatch};
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
