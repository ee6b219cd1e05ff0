//! Catalog use cases - movie lifecycle and counter mutations.
//!
//! Every operation touches exactly one movie record. Domain failures come back
//! as [`CatalogError`] values carrying the offending id, name or quantity;
//! the API layer decides how they surface to clients.

mod create;
mod delete;
mod queries;
mod reactions;
mod score;

use std::fmt;

use movieflix_domain::{DomainError, MovieId};

use crate::infrastructure::ports::RepoError;

pub use create::CreateMovie;
pub use delete::DeleteMovie;
pub use queries::{FindMovieByName, ListMovies};
pub use reactions::RecordReaction;
pub use score::AdjustScore;

/// How a missing movie was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieKey {
    Id(MovieId),
    Name(String),
}

impl fmt::Display for MovieKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Name(name) => write!(f, "name {}", name),
        }
    }
}

/// Error type for catalog use cases.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Movie with {0} not found in the system.")]
    NotFound(MovieKey),

    #[error("Movie with name {name} already registered in the system.")]
    AlreadyRegistered { name: String },

    #[error("Movie with id {id}: a score change of {quantity} exceeds the allowed score range.")]
    ScoreExceeded { id: MovieId, quantity: u32 },

    #[error("Movie with id {id} cannot lower its max score to {max} below its current score {score}.")]
    InvalidCeiling { id: MovieId, max: u32, score: u32 },

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl CatalogError {
    pub fn not_found_id(id: MovieId) -> Self {
        Self::NotFound(MovieKey::Id(id))
    }

    pub fn not_found_name(name: impl Into<String>) -> Self {
        Self::NotFound(MovieKey::Name(name.into()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Container for catalog use cases.
pub struct CatalogUseCases {
    pub create: CreateMovie,
    pub find_by_name: FindMovieByName,
    pub list: ListMovies,
    pub delete: DeleteMovie,
    pub reactions: RecordReaction,
    pub score: AdjustScore,
}

impl CatalogUseCases {
    pub fn new(
        create: CreateMovie,
        find_by_name: FindMovieByName,
        list: ListMovies,
        delete: DeleteMovie,
        reactions: RecordReaction,
        score: AdjustScore,
    ) -> Self {
        Self {
            create,
            find_by_name,
            list,
            delete,
            reactions,
            score,
        }
    }
}
