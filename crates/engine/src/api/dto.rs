//! JSON request and response bodies for the movie API.

use movieflix_domain::{
    DomainError, Genre, Movie, MovieData, MovieDescription, MovieName, ReleaseYear,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/movies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub name: String,
    pub description: String,
    pub year: i32,
    /// Genre tag, matched case-insensitively (e.g. `SCIENCE_FICTION`)
    pub genre: String,
}

impl TryFrom<CreateMovieRequest> for MovieData {
    type Error = DomainError;

    fn try_from(request: CreateMovieRequest) -> Result<Self, Self::Error> {
        Ok(MovieData::new(
            MovieName::new(request.name)?,
            MovieDescription::new(request.description)?,
            ReleaseYear::new(request.year)?,
            request.genre.parse::<Genre>()?,
        ))
    }
}

/// Body of the score increment/decrement endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreQuantityRequest {
    pub quantity: i64,
}

/// Body of `PATCH /api/v1/movies/{id}/max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCeilingRequest {
    pub max: i64,
}

/// Movie as returned by every endpoint that yields one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub year: i32,
    pub genre: Genre,
    pub views: u64,
    pub likes: u64,
    pub dislikes: u64,
    pub max: u32,
    pub score: u32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id().as_i64(),
            name: movie.name().to_string(),
            description: movie.description().to_string(),
            year: movie.year().value(),
            genre: movie.genre(),
            views: movie.views(),
            likes: movie.likes(),
            dislikes: movie.dislikes(),
            max: movie.max(),
            score: movie.score(),
        }
    }
}
