//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod memory;
pub mod ports;
pub mod sqlite;

use std::sync::Arc;

use anyhow::Context;

use config::{StoreBackend, StoreConfig};
use memory::InMemoryMovieRepo;
use ports::MovieRepo;
use sqlite::SqliteMovieRepo;

/// Open the record store selected by configuration.
pub async fn connect_movie_repo(config: &StoreConfig) -> anyhow::Result<Arc<dyn MovieRepo>> {
    match config.backend {
        StoreBackend::Sqlite => {
            tracing::info!(path = %config.sqlite_path, "Opening SQLite movie store");
            let repo = SqliteMovieRepo::new(&config.sqlite_path)
                .await
                .with_context(|| format!("failed to open SQLite store at {}", config.sqlite_path))?;
            Ok(Arc::new(repo))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory movie store; data is lost on restart");
            Ok(Arc::new(InMemoryMovieRepo::new()))
        }
    }
}
