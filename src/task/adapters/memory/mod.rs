//! In-memory storage adapter for tests and ephemeral sessions.

mod storage;

pub use storage::InMemoryTaskStorage;
