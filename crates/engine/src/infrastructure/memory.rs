//! In-memory movie storage for tests and development.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use movieflix_domain::{Counter, Movie, MovieData, MovieId, ScoreState};

use crate::infrastructure::ports::{MovieRepo, RepoError};

const ENTITY: &str = "Movie";

/// DashMap-backed record store.
///
/// Per-record writes happen under the map's entry lock, so counter bumps and
/// score compare-and-set behave like single-row updates.
pub struct InMemoryMovieRepo {
    movies: DashMap<MovieId, Movie>,
    /// Unique name index
    names: DashMap<String, MovieId>,
    next_id: AtomicI64,
}

impl InMemoryMovieRepo {
    pub fn new() -> Self {
        Self {
            movies: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMovieRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepo for InMemoryMovieRepo {
    async fn save(&self, data: &MovieData) -> Result<Movie, RepoError> {
        match self.names.entry(data.name.as_str().to_string()) {
            Entry::Occupied(_) => Err(RepoError::already_exists(ENTITY, &data.name)),
            Entry::Vacant(slot) => {
                let id = MovieId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst));
                let movie = Movie::new(id, data.clone());
                self.movies.insert(id, movie.clone());
                slot.insert(id);
                Ok(movie)
            }
        }
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, RepoError> {
        Ok(self.movies.get(&id).map(|m| m.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Movie>, RepoError> {
        let Some(id) = self.names.get(name).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.get(id).await
    }

    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        let mut movies: Vec<Movie> = self.movies.iter().map(|m| m.value().clone()).collect();
        movies.sort_by_key(|m| m.id());
        Ok(movies)
    }

    async fn delete(&self, id: MovieId) -> Result<(), RepoError> {
        let (_, movie) = self
            .movies
            .remove(&id)
            .ok_or_else(|| RepoError::not_found(ENTITY, id))?;
        self.names.remove(movie.name().as_str());
        Ok(())
    }

    async fn increment_counter(
        &self,
        id: MovieId,
        counter: Counter,
    ) -> Result<Option<Movie>, RepoError> {
        let Some(mut movie) = self.movies.get_mut(&id) else {
            return Ok(None);
        };
        movie.increment(counter).map_err(RepoError::constraint)?;
        Ok(Some(movie.clone()))
    }

    async fn update_score(
        &self,
        id: MovieId,
        expected: ScoreState,
        next: ScoreState,
    ) -> Result<Option<Movie>, RepoError> {
        let Some(mut movie) = self.movies.get_mut(&id) else {
            return Ok(None);
        };
        if movie.score_state() != expected {
            return Ok(None);
        }
        let next = ScoreState::new(next.score, next.max).map_err(RepoError::constraint)?;
        movie.set_score_state(next);
        Ok(Some(movie.clone()))
    }
}
