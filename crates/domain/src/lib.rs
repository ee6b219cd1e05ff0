//! Movieflix domain - movie records, their validated fields, and the score rules.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Movie, MovieData};
pub use error::DomainError;
pub use ids::MovieId;
pub use value_objects::{
    Counter, Genre, MovieDescription, MovieName, ReleaseYear, ScoreCeiling, ScoreChange,
    ScoreQuantity, ScoreState, FIRST_FILM_YEAR, MAX_COUNTER, MAX_DESCRIPTION_LENGTH,
    MAX_NAME_LENGTH, MAX_SCORE, MIN_DESCRIPTION_LENGTH,
};
