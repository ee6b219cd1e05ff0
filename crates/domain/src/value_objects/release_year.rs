use std::fmt;

use crate::error::DomainError;

/// Year of the first publicly known film.
pub const FIRST_FILM_YEAR: i32 = 1888;

/// A release year no earlier than [`FIRST_FILM_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub fn new(year: i32) -> Result<Self, DomainError> {
        if year < FIRST_FILM_YEAR {
            return Err(DomainError::validation(format!(
                "Release year must be {} or later",
                FIRST_FILM_YEAR
            )));
        }
        Ok(Self(year))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ReleaseYear {
    type Error = DomainError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_film_year_is_accepted() {
        assert_eq!(ReleaseYear::new(1888).unwrap().value(), 1888);
    }

    #[test]
    fn earlier_years_are_rejected() {
        assert!(matches!(
            ReleaseYear::new(1887),
            Err(DomainError::Validation(_))
        ));
    }
}
