//! Repository port traits for database access.

use async_trait::async_trait;
use movieflix_domain::{Counter, Movie, MovieData, MovieId, ScoreState};

use super::error::RepoError;

// =============================================================================
// Movie Storage
// =============================================================================

/// Record store for movies.
///
/// Every method is a single atomic store call; the catalog engine never
/// composes them into a transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Insert a new movie and return it with its store-assigned id.
    ///
    /// Fails with `RepoError::AlreadyExists` when the name is taken.
    async fn save(&self, data: &MovieData) -> Result<Movie, RepoError>;

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, RepoError>;

    /// Exact, case-sensitive name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Movie>, RepoError>;

    /// All movies in ascending id order.
    async fn list(&self) -> Result<Vec<Movie>, RepoError>;

    /// Fails with `RepoError::NotFound` when nothing was removed.
    async fn delete(&self, id: MovieId) -> Result<(), RepoError>;

    /// Add one to a counter in place. `None` when the movie does not exist.
    async fn increment_counter(
        &self,
        id: MovieId,
        counter: Counter,
    ) -> Result<Option<Movie>, RepoError>;

    /// Write `next` only if the stored score state still equals `expected`.
    ///
    /// `None` when the movie is missing or the expectation is stale.
    async fn update_score(
        &self,
        id: MovieId,
        expected: ScoreState,
        next: ScoreState,
    ) -> Result<Option<Movie>, RepoError>;
}
