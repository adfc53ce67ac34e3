//! Unit tests for the analytics functions.
