//! Shared test fixtures for integration tests.
//!
//! This module provides the models exercised by several integration test
//! files so each scenario projects the same data.

pub mod models;
