//! Unit tests for the task module.

mod support;

mod file_storage_tests;
