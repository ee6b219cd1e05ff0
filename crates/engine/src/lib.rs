//! MovieFlix catalog engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog operations over the record store
//! - `infrastructure/` - Configuration, store port and its adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit and end-to-end tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end catalog flows against a real SQLite file.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
