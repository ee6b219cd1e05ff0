//! E2E test helpers for constructing the full application stack.

use std::sync::Arc;

use movieflix_domain::{Genre, Movie, MovieData};
use tempfile::TempDir;

use crate::app::App;
use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::sqlite::SqliteMovieRepo;
use crate::use_cases::CatalogError;

/// A fully wired app over a throwaway SQLite database.
///
/// The temporary directory lives as long as the context.
pub struct E2ETestContext {
    pub app: Arc<App>,
    pub db_path: String,
    _dir: TempDir,
}

impl E2ETestContext {
    pub async fn setup() -> Result<Self, Box<dyn std::error::Error>> {
        Self::setup_with_config(CatalogConfig::default()).await
    }

    pub async fn setup_with_config(
        config: CatalogConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let db_path = dir.path().join("movieflix.db").to_string_lossy().to_string();
        let repo = SqliteMovieRepo::new(&db_path).await?;
        let app = Arc::new(App::new(Arc::new(repo), config));

        Ok(Self {
            app,
            db_path,
            _dir: dir,
        })
    }

    /// Register a movie through the create use case.
    pub async fn create(
        &self,
        name: &str,
        year: i32,
        genre: Genre,
    ) -> Result<Movie, CatalogError> {
        let data = MovieData::parse(
            name,
            format!("{} is a film kept in the end-to-end catalog.", name),
            year,
            genre,
        )?;
        self.app.use_cases.catalog.create.execute(data).await
    }
}
