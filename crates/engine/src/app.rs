//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::ports::MovieRepo;
use crate::use_cases::catalog::{
    AdjustScore, CatalogUseCases, CreateMovie, DeleteMovie, FindMovieByName, ListMovies,
    RecordReaction,
};

/// Main application state.
///
/// Holds the record store and the use cases built on top of it.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub movie: Arc<dyn MovieRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: CatalogUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(movie_repo: Arc<dyn MovieRepo>, catalog_config: CatalogConfig) -> Self {
        let catalog = CatalogUseCases::new(
            CreateMovie::new(movie_repo.clone()),
            FindMovieByName::new(movie_repo.clone()),
            ListMovies::new(movie_repo.clone()),
            DeleteMovie::new(movie_repo.clone()),
            RecordReaction::new(movie_repo.clone()),
            AdjustScore::new(movie_repo.clone(), catalog_config.score_update_attempts),
        );

        Self {
            repositories: Repositories { movie: movie_repo },
            use_cases: UseCases { catalog },
        }
    }
}
