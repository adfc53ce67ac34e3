//! Task collection management.
//!
//! The [`services::TaskStore`] owns the live task list, applies add, update,
//! delete and single-slot undo commands, and hands full snapshots to a
//! [`ports::TaskStorage`] collaborator after every mutation. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and its configuration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
