//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use movieflix_domain::{DomainError, MovieData, MovieId, ScoreCeiling, ScoreQuantity};
use std::sync::Arc;

use crate::api::dto::{
    CreateMovieRequest, MovieResponse, ScoreCeilingRequest, ScoreQuantityRequest,
};
use crate::app::App;
use crate::use_cases::CatalogError;

/// Create all HTTP routes.
///
/// The `{key}` segment is a movie name for lookups and a numeric id
/// everywhere else.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/v1/movies", get(list_movies).post(create_movie))
        .route(
            "/api/v1/movies/{key}",
            get(find_movie_by_name).delete(delete_movie),
        )
        .route("/api/v1/movies/{key}/view", get(view_movie))
        .route("/api/v1/movies/{key}/like", get(like_movie))
        .route("/api/v1/movies/{key}/dislike", get(dislike_movie))
        .route("/api/v1/movies/{key}/increment", patch(increment_score))
        .route("/api/v1/movies/{key}/decrement", patch(decrement_score))
        .route("/api/v1/movies/{key}/max", patch(set_score_ceiling))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Catalog
// =============================================================================

async fn create_movie(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let Json(body) = body?;
    let data = MovieData::try_from(body)?;
    let movie = app.use_cases.catalog.create.execute(data).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

async fn list_movies(State(app): State<Arc<App>>) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = app.use_cases.catalog.list.execute().await?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

async fn find_movie_by_name(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = app.use_cases.catalog.find_by_name.execute(&name).await?;
    Ok(Json(movie.into()))
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.catalog.delete.execute(id.parse()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn view_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = app.use_cases.catalog.reactions.view(id.parse()?).await?;
    Ok(Json(movie.into()))
}

async fn like_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = app.use_cases.catalog.reactions.like(id.parse()?).await?;
    Ok(Json(movie.into()))
}

async fn dislike_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = app.use_cases.catalog.reactions.dislike(id.parse()?).await?;
    Ok(Json(movie.into()))
}

async fn increment_score(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<ScoreQuantityRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Json(body) = body?;
    let id: MovieId = id.parse()?;
    let quantity = ScoreQuantity::try_from(body.quantity)?;
    let movie = app.use_cases.catalog.score.increment(id, quantity).await?;
    Ok(Json(movie.into()))
}

async fn decrement_score(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<ScoreQuantityRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Json(body) = body?;
    let id: MovieId = id.parse()?;
    let quantity = ScoreQuantity::try_from(body.quantity)?;
    let movie = app.use_cases.catalog.score.decrement(id, quantity).await?;
    Ok(Json(movie.into()))
}

async fn set_score_ceiling(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<ScoreCeilingRequest>, JsonRejection>,
) -> Result<Json<MovieResponse>, ApiError> {
    let Json(body) = body?;
    let id: MovieId = id.parse()?;
    let ceiling = ScoreCeiling::try_from(body.max)?;
    let movie = app.use_cases.catalog.score.set_ceiling(id, ceiling).await?;
    Ok(Json(movie.into()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CatalogError::AlreadyRegistered { .. } => ApiError::Conflict(e.to_string()),
            CatalogError::ScoreExceeded { .. }
            | CatalogError::InvalidCeiling { .. }
            | CatalogError::Validation(_) => ApiError::BadRequest(e.to_string()),
            CatalogError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Malformed or incomplete JSON bodies answer 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
