//! Step definitions for task undo scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
