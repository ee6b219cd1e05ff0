//! Catalog E2E integration tests.
//!
//! These tests drive the full catalog through a completely wired `App`
//! backed by a real SQLite file in a temporary directory.
//!
//! # Running E2E Tests
//!
//! ```bash
//! cargo test -p movieflix-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
