//! Taskboard: revenue-aware task tracking.
//!
//! This crate keeps an authoritative, persisted collection of revenue-tracked
//! tasks and derives ranking and business analytics from it.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, the owning store, and its storage collaborators
//! - [`analytics`]: Pure ROI, ranking, and aggregate computations

pub mod analytics;
pub mod task;
