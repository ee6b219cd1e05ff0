//! Common test helpers for building movies and wiring the catalog.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{movie_data, stored_movie};
//!
//! let data = movie_data("Matrix");
//! let movie = stored_movie(1, "Matrix").with_score(3, 10);
//! ```

use movieflix_domain::{Genre, Movie, MovieData, MovieId, ScoreState};

/// Valid creation input with the given name.
pub fn movie_data(name: &str) -> MovieData {
    MovieData::parse(
        name,
        "A hacker discovers that reality is a simulation.",
        1999,
        Genre::ScienceFiction,
    )
    .expect("fixture movie data is valid")
}

/// A movie as the store would return it right after creation.
pub fn stored_movie(id: i64, name: &str) -> Movie {
    Movie::new(MovieId::from_i64(id), movie_data(name))
}

/// Builder-style tweaks for fixture movies.
pub trait MovieFixtureExt {
    fn with_score(self, score: u32, max: u32) -> Movie;
}

impl MovieFixtureExt for Movie {
    fn with_score(mut self, score: u32, max: u32) -> Movie {
        self.set_score_state(ScoreState::new(score, max).expect("fixture score state is valid"));
        self
    }
}
