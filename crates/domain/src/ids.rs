use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned movie identifier.
///
/// Unlike client-generated ids, a `MovieId` only exists once the record
/// store has persisted the movie; creation input (`MovieData`) carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MovieId> for i64 {
    fn from(value: MovieId) -> Self {
        value.0
    }
}

impl FromStr for MovieId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::parse(format!("Invalid movie id: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!("42".parse::<MovieId>().unwrap(), MovieId::from_i64(42));
        assert_eq!(" 7 ".parse::<MovieId>().unwrap().as_i64(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "Matrix".parse::<MovieId>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&MovieId::from_i64(3)).unwrap();
        assert_eq!(json, "3");
    }
}
