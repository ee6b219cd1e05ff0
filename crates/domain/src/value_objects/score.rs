//! Score value objects - the bounded per-movie rating budget
//!
//! A movie's `score` lives inside `[0, max]`, and `max` itself never exceeds
//! [`MAX_SCORE`]. All arithmetic is done here so the catalog engine only has
//! to decide what to do with a [`ScoreChange`].

use crate::error::DomainError;

/// Upper bound for both the score ceiling and any single score adjustment.
pub const MAX_SCORE: u32 = 1000;

fn bounded(value: i64, field: &str) -> Result<u32, DomainError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_SCORE)
        .ok_or_else(|| {
            DomainError::validation(format!("{} must be between 0 and {}", field, MAX_SCORE))
        })
}

/// Amount to add to or remove from a score (0-1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreQuantity(u32);

impl ScoreQuantity {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        bounded(value, "Score quantity").map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ScoreQuantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Requested score ceiling for a movie (0-1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreCeiling(u32);

impl ScoreCeiling {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        bounded(value, "Score ceiling").map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ScoreCeiling {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The pair a score adjustment reads and writes.
///
/// The record store compares against this pair when applying a score change,
/// so a concurrent writer can never be silently overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreState {
    pub score: u32,
    pub max: u32,
}

/// Result of applying an adjustment to a [`ScoreState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreChange {
    /// The adjustment fits; this is the state to persist
    Updated(ScoreState),
    /// The adjustment would leave the allowed bounds
    OutOfBounds,
}

impl ScoreChange {
    /// Get the new state, if the adjustment was accepted
    pub fn new_state(&self) -> Option<ScoreState> {
        match self {
            Self::Updated(state) => Some(*state),
            Self::OutOfBounds => None,
        }
    }
}

impl ScoreState {
    /// Build a state, checking `score <= max <= MAX_SCORE`.
    pub fn new(score: u32, max: u32) -> Result<Self, DomainError> {
        if max > MAX_SCORE {
            return Err(DomainError::validation(format!(
                "Score ceiling cannot exceed {}",
                MAX_SCORE
            )));
        }
        if score > max {
            return Err(DomainError::validation(format!(
                "Score {} exceeds its ceiling {}",
                score, max
            )));
        }
        Ok(Self { score, max })
    }

    /// Add `quantity`; reaching exactly `max` is allowed.
    pub fn incremented(&self, quantity: ScoreQuantity) -> ScoreChange {
        let candidate = u64::from(self.score) + u64::from(quantity.value());
        if candidate <= u64::from(self.max) {
            ScoreChange::Updated(Self {
                score: candidate as u32,
                max: self.max,
            })
        } else {
            ScoreChange::OutOfBounds
        }
    }

    /// Remove `quantity`; the result must stay strictly above zero.
    ///
    /// Landing on exactly 0 is rejected even though 0 is a legal score.
    pub fn decremented(&self, quantity: ScoreQuantity) -> ScoreChange {
        let candidate = i64::from(self.score) - i64::from(quantity.value());
        if candidate > 0 {
            ScoreChange::Updated(Self {
                score: candidate as u32,
                max: self.max,
            })
        } else {
            ScoreChange::OutOfBounds
        }
    }

    /// Move the ceiling; it may not drop below the current score.
    pub fn with_ceiling(&self, ceiling: ScoreCeiling) -> ScoreChange {
        if ceiling.value() >= self.score {
            ScoreChange::Updated(Self {
                score: self.score,
                max: ceiling.value(),
            })
        } else {
            ScoreChange::OutOfBounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(value: i64) -> ScoreQuantity {
        ScoreQuantity::new(value).unwrap()
    }

    #[test]
    fn quantity_bounds() {
        assert!(ScoreQuantity::new(0).is_ok());
        assert!(ScoreQuantity::new(1000).is_ok());
        assert!(ScoreQuantity::new(-1).is_err());
        assert!(ScoreQuantity::new(1001).is_err());
    }

    #[test]
    fn ceiling_bounds() {
        assert!(ScoreCeiling::new(1000).is_ok());
        assert!(ScoreCeiling::new(1001).is_err());
        assert!(ScoreCeiling::new(-5).is_err());
    }

    #[test]
    fn state_rejects_score_above_ceiling() {
        assert!(ScoreState::new(5, 4).is_err());
        assert!(ScoreState::new(0, 1001).is_err());
        assert_eq!(ScoreState::new(4, 4).unwrap(), ScoreState { score: 4, max: 4 });
    }

    #[test]
    fn increment_to_exactly_max_is_allowed() {
        let state = ScoreState { score: 3, max: 10 };
        assert_eq!(
            state.incremented(qty(7)),
            ScoreChange::Updated(ScoreState { score: 10, max: 10 })
        );
    }

    #[test]
    fn increment_past_max_is_rejected() {
        let state = ScoreState { score: 3, max: 10 };
        assert_eq!(state.incremented(qty(8)), ScoreChange::OutOfBounds);
    }

    #[test]
    fn increment_with_zero_ceiling_is_rejected() {
        let state = ScoreState::default();
        assert_eq!(state.incremented(qty(1)), ScoreChange::OutOfBounds);
        // Adding nothing still fits
        assert!(state.incremented(qty(0)).new_state().is_some());
    }

    #[test]
    fn decrement_must_stay_above_zero() {
        let state = ScoreState { score: 5, max: 10 };
        assert_eq!(
            state.decremented(qty(4)),
            ScoreChange::Updated(ScoreState { score: 1, max: 10 })
        );
        assert_eq!(state.decremented(qty(5)), ScoreChange::OutOfBounds);
        assert_eq!(state.decremented(qty(6)), ScoreChange::OutOfBounds);
    }

    #[test]
    fn decrement_from_zero_is_rejected() {
        let state = ScoreState { score: 0, max: 10 };
        assert_eq!(state.decremented(qty(0)), ScoreChange::OutOfBounds);
    }

    #[test]
    fn ceiling_cannot_drop_below_score() {
        let state = ScoreState { score: 6, max: 10 };
        assert_eq!(
            state.with_ceiling(ScoreCeiling::new(6).unwrap()),
            ScoreChange::Updated(ScoreState { score: 6, max: 6 })
        );
        assert_eq!(
            state.with_ceiling(ScoreCeiling::new(5).unwrap()),
            ScoreChange::OutOfBounds
        );
    }
}
