//! Create movie use case - registers a new movie under a unique name.

use std::sync::Arc;

use movieflix_domain::{Movie, MovieData};
use tracing::instrument;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

/// Persists a new movie after checking that its name is free.
///
/// The store's own unique constraint backs up the pre-check, so two
/// concurrent creations of the same name still yield one record.
pub struct CreateMovie {
    movies: Arc<dyn MovieRepo>,
}

impl CreateMovie {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }

    #[instrument(skip(self, data), fields(name = %data.name))]
    pub async fn execute(&self, data: MovieData) -> Result<Movie, CatalogError> {
        if self.movies.find_by_name(data.name.as_str()).await?.is_some() {
            tracing::debug!("Movie name already registered");
            return Err(CatalogError::AlreadyRegistered {
                name: data.name.to_string(),
            });
        }

        let movie = self.movies.save(&data).await.map_err(|e| {
            if e.is_already_exists() {
                CatalogError::AlreadyRegistered {
                    name: data.name.to_string(),
                }
            } else {
                e.into()
            }
        })?;

        tracing::info!(
            movie_id = %movie.id(),
            genre = movie.genre().display_name(),
            "Movie created"
        );
        Ok(movie)
    }
}
