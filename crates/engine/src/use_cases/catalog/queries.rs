//! Read-only catalog queries.

use std::sync::Arc;

use movieflix_domain::Movie;
use tracing::instrument;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

/// Looks a movie up by its exact name.
pub struct FindMovieByName {
    movies: Arc<dyn MovieRepo>,
}

impl FindMovieByName {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<Movie, CatalogError> {
        self.movies
            .find_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::not_found_name(name))
    }
}

/// Lists every stored movie in store order.
pub struct ListMovies {
    movies: Arc<dyn MovieRepo>,
}

impl ListMovies {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }

    pub async fn execute(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.list().await?)
    }
}
