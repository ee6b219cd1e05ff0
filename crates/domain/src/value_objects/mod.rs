//! Value objects - Immutable objects defined by their attributes

mod counter;
mod genre;
mod names;
mod release_year;
mod score;

pub use counter::{Counter, MAX_COUNTER};
pub use genre::Genre;
pub use names::{
    MovieDescription, MovieName, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MIN_DESCRIPTION_LENGTH,
};
pub use release_year::{ReleaseYear, FIRST_FILM_YEAR};
pub use score::{ScoreCeiling, ScoreChange, ScoreQuantity, ScoreState, MAX_SCORE};
