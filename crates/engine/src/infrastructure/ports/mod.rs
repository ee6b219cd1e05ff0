//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Movie storage (SQLite in production, in-memory for tests and development)

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::MovieRepo;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockMovieRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
