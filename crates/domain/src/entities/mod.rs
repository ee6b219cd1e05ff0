//! Domain entities

mod movie;

pub use movie::{Movie, MovieData};
