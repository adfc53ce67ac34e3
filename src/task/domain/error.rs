//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The revenue amount is negative or not a finite number.
    #[error("invalid revenue {0}, expected a finite non-negative amount")]
    InvalidRevenue(f64),

    /// The time taken is negative or not a finite number.
    #[error("invalid time taken {0}, expected finite non-negative hours")]
    InvalidTimeTaken(f64),
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
