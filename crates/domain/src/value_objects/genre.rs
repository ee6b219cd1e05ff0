//! Movie genre tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fixed set of genre tags a movie can be filed under.
///
/// Serialized (and stored) as the upper snake-case tag, e.g. `SCIENCE_FICTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Epics,
    Fantasy,
    Historical,
    Horror,
    Mystery,
    Romance,
    Satire,
    ScienceFiction,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 16] = [
        Self::Action,
        Self::Adventure,
        Self::Comedy,
        Self::Crime,
        Self::Drama,
        Self::Epics,
        Self::Fantasy,
        Self::Historical,
        Self::Horror,
        Self::Mystery,
        Self::Romance,
        Self::Satire,
        Self::ScienceFiction,
        Self::Thriller,
        Self::War,
        Self::Western,
    ];

    /// Stable tag used on the wire and in storage.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Adventure => "ADVENTURE",
            Self::Comedy => "COMEDY",
            Self::Crime => "CRIME",
            Self::Drama => "DRAMA",
            Self::Epics => "EPICS",
            Self::Fantasy => "FANTASY",
            Self::Historical => "HISTORICAL",
            Self::Horror => "HORROR",
            Self::Mystery => "MYSTERY",
            Self::Romance => "ROMANCE",
            Self::Satire => "SATIRE",
            Self::ScienceFiction => "SCIENCE_FICTION",
            Self::Thriller => "THRILLER",
            Self::War => "WAR",
            Self::Western => "WESTERN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Drama => "Drama",
            Self::Epics => "Epics",
            Self::Fantasy => "Fantasy",
            Self::Historical => "Historical",
            Self::Horror => "Horror",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::Satire => "Satire",
            Self::ScienceFiction => "Science Fiction",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown genre: {}", s)))
    }
}
