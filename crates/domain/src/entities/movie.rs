//! Movie entity - the single record kept by the catalog
//!
//! A movie is created from [`MovieData`] (no id yet), receives its
//! [`MovieId`] from the record store, and afterwards only its audience
//! counters and score budget change.

use crate::error::DomainError;
use crate::ids::MovieId;
use crate::value_objects::{
    Counter, Genre, MovieDescription, MovieName, ReleaseYear, ScoreState, MAX_COUNTER,
};

/// Creation input for a movie, validated but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieData {
    pub name: MovieName,
    pub description: MovieDescription,
    pub year: ReleaseYear,
    pub genre: Genre,
}

impl MovieData {
    pub fn new(
        name: MovieName,
        description: MovieDescription,
        year: ReleaseYear,
        genre: Genre,
    ) -> Self {
        Self {
            name,
            description,
            year,
            genre,
        }
    }

    /// Validate raw field values into creation input.
    ///
    /// The first failing field wins.
    pub fn parse(
        name: impl Into<String>,
        description: impl Into<String>,
        year: i32,
        genre: Genre,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            MovieName::new(name)?,
            MovieDescription::new(description)?,
            ReleaseYear::new(year)?,
            genre,
        ))
    }
}

/// A persisted movie record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    name: MovieName,
    description: MovieDescription,
    year: ReleaseYear,
    genre: Genre,
    views: u64,
    likes: u64,
    dislikes: u64,
    score: ScoreState,
}

impl Movie {
    /// A freshly stored movie: all counters zero, no score budget.
    pub fn new(id: MovieId, data: MovieData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            year: data.year,
            genre: data.genre,
            views: 0,
            likes: 0,
            dislikes: 0,
            score: ScoreState::default(),
        }
    }

    /// Reconstitute a movie from stored values.
    pub fn from_parts(
        id: MovieId,
        data: MovieData,
        views: u64,
        likes: u64,
        dislikes: u64,
        score: ScoreState,
    ) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            year: data.year,
            genre: data.genre,
            views,
            likes,
            dislikes,
            score,
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn name(&self) -> &MovieName {
        &self.name
    }

    pub fn description(&self) -> &MovieDescription {
        &self.description
    }

    pub fn year(&self) -> ReleaseYear {
        self.year
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    pub fn counter(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Views => self.views,
            Counter::Likes => self.likes,
            Counter::Dislikes => self.dislikes,
        }
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn max(&self) -> u32 {
        self.score.max
    }

    pub fn score_state(&self) -> ScoreState {
        self.score
    }

    /// Bump one audience counter by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the counter already sits at
    /// [`MAX_COUNTER`]; the movie is left unchanged.
    pub fn increment(&mut self, counter: Counter) -> Result<(), DomainError> {
        let slot = match counter {
            Counter::Views => &mut self.views,
            Counter::Likes => &mut self.likes,
            Counter::Dislikes => &mut self.dislikes,
        };
        if *slot >= MAX_COUNTER {
            return Err(DomainError::validation(format!(
                "{} counter cannot exceed {}",
                counter, MAX_COUNTER
            )));
        }
        *slot += 1;
        Ok(())
    }

    pub fn set_score_state(&mut self, state: ScoreState) {
        self.score = state;
    }
}
