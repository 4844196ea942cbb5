//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A mock backend with a gateway wired to it
//! - JSON fixtures for the backend's records

pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
