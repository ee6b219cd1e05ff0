//! Delete movie use case.

use std::sync::Arc;

use movieflix_domain::MovieId;
use tracing::instrument;

use crate::infrastructure::ports::MovieRepo;

use super::CatalogError;

/// Permanently removes a movie.
pub struct DeleteMovie {
    movies: Arc<dyn MovieRepo>,
}

impl DeleteMovie {
    pub fn new(movies: Arc<dyn MovieRepo>) -> Self {
        Self { movies }
    }

    #[instrument(skip(self), fields(movie_id = %id))]
    pub async fn execute(&self, id: MovieId) -> Result<(), CatalogError> {
        if self.movies.get(id).await?.is_none() {
            return Err(CatalogError::not_found_id(id));
        }

        match self.movies.delete(id).await {
            Ok(()) => {
                tracing::info!("Movie deleted");
                Ok(())
            }
            // Deleted by someone else between the check and the delete
            Err(e) if e.is_not_found() => Err(CatalogError::not_found_id(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockMovieRepo, RepoError};
    use crate::test_fixtures::stored_movie;
    use mockall::predicate::*;

    #[tokio::test]
    async fn deletes_existing_movie() {
        let id = MovieId::from_i64(5);
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .with(eq(id))
            .returning(|_| Ok(Some(stored_movie(5, "Matrix"))));
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));

        let use_case = DeleteMovie::new(Arc::new(repo));
        assert!(use_case.execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_movie_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        // No delete expected

        let use_case = DeleteMovie::new(Arc::new(repo));
        let err = use_case.execute(MovieId::from_i64(5)).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn concurrent_delete_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(stored_movie(5, "Matrix"))));
        repo.expect_delete()
            .returning(|id| Err(RepoError::not_found("Movie", id)));

        let use_case = DeleteMovie::new(Arc::new(repo));
        let err = use_case.execute(MovieId::from_i64(5)).await.unwrap_err();

        assert!(err.is_not_found());
    }
}
