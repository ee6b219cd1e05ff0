//! Audience reactions - views, likes and dislikes.

use std::sync::Arc;

use movieflix_domain::{Counter, Movie, MovieId};
use tracing::instrument;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

/// Records one view, like or dislike against a movie.
///
/// Each call raises exactly one counter by one. The store applies the bump
/// atomically, so concurrent reactions are never lost.
pub struct RecordReaction {
    movies: Arc<dyn MovieRepo>,
}

impl RecordReaction {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }

    #[instrument(skip(self), fields(movie_id = %id, counter = %counter))]
    pub async fn execute(&self, id: MovieId, counter: Counter) -> Result<Movie, CatalogError> {
        let movie = self
            .movies
            .increment_counter(id, counter)
            .await?
            .ok_or_else(|| CatalogError::not_found_id(id))?;

        tracing::debug!(value = movie.counter(counter), "Counter incremented");
        Ok(movie)
    }

    pub async fn view(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.execute(id, Counter::Views).await
    }

    pub async fn like(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.execute(id, Counter::Likes).await
    }

    pub async fn dislike(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.execute(id, Counter::Dislikes).await
    }
}
