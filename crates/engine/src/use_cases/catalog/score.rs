//! Score adjustments - bounded increments, decrements and ceiling changes.
//!
//! Every adjustment is a read-compute-write cycle. The write is a
//! compare-and-set against the `(score, max)` pair that was read; when another
//! writer got there first the cycle starts over with fresh values, up to the
//! configured number of attempts.

use std::sync::Arc;

use movieflix_domain::{Movie, MovieId, ScoreCeiling, ScoreChange, ScoreQuantity, ScoreState};
use tracing::instrument;

use crate::infrastructure::ports::{MovieRepo, RepoError};

use super::CatalogError;

pub struct AdjustScore {
    movies: Arc<dyn MovieRepo>,
    max_attempts: u32,
}

impl AdjustScore {
    pub fn new(movies: Arc<dyn MovieRepo>, max_attempts: u32) -> Self {
        Self {
            movies,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Add `quantity` to the score; landing exactly on `max` is accepted.
    #[instrument(skip(self), fields(movie_id = %id, quantity = quantity.value()))]
    pub async fn increment(
        &self,
        id: MovieId,
        quantity: ScoreQuantity,
    ) -> Result<Movie, CatalogError> {
        self.apply(
            id,
            |state| state.incremented(quantity),
            |_| CatalogError::ScoreExceeded {
                id,
                quantity: quantity.value(),
            },
        )
        .await
    }

    /// Remove `quantity` from the score; the result must stay above zero.
    #[instrument(skip(self), fields(movie_id = %id, quantity = quantity.value()))]
    pub async fn decrement(
        &self,
        id: MovieId,
        quantity: ScoreQuantity,
    ) -> Result<Movie, CatalogError> {
        self.apply(
            id,
            |state| state.decremented(quantity),
            |_| CatalogError::ScoreExceeded {
                id,
                quantity: quantity.value(),
            },
        )
        .await
    }

    /// Move the score ceiling; it may not drop below the current score.
    #[instrument(skip(self), fields(movie_id = %id, max = ceiling.value()))]
    pub async fn set_ceiling(
        &self,
        id: MovieId,
        ceiling: ScoreCeiling,
    ) -> Result<Movie, CatalogError> {
        self.apply(
            id,
            |state| state.with_ceiling(ceiling),
            |state| CatalogError::InvalidCeiling {
                id,
                max: ceiling.value(),
                score: state.score,
            },
        )
        .await
    }

    async fn apply(
        &self,
        id: MovieId,
        change: impl Fn(ScoreState) -> ScoreChange,
        rejected: impl Fn(ScoreState) -> CatalogError,
    ) -> Result<Movie, CatalogError> {
        for attempt in 1..=self.max_attempts {
            let current = self.current(id).await?;
            let expected = current.score_state();

            let Some(next) = change(expected).new_state() else {
                tracing::debug!(score = expected.score, max = expected.max, "Score change rejected");
                return Err(rejected(expected));
            };

            if let Some(updated) = self.movies.update_score(id, expected, next).await? {
                tracing::info!(score = updated.score(), max = updated.max(), "Score updated");
                return Ok(updated);
            }

            tracing::debug!(attempt, "Score changed concurrently, retrying");
        }

        // The last miss may have been a delete rather than a competing write
        self.current(id).await?;
        tracing::warn!(attempts = self.max_attempts, "Score update gave up after repeated conflicts");
        Err(RepoError::conflict("Movie", id).into())
    }

    async fn current(&self, id: MovieId) -> Result<Movie, CatalogError> {
        self.movies
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockMovieRepo;
    use crate::test_fixtures::{stored_movie, MovieFixtureExt};
    use mockall::predicate::*;

    fn qty(value: i64) -> ScoreQuantity {
        ScoreQuantity::new(value).unwrap()
    }

    fn state(score: u32, max: u32) -> ScoreState {
        ScoreState { score, max }
    }

    fn repo_holding(score: u32, max: u32) -> MockMovieRepo {
        let mut repo = MockMovieRepo::new();
        repo.expect_get()
            .returning(move |id| Ok(Some(stored_movie(id.as_i64(), "Matrix").with_score(score, max))));
        repo
    }

    fn expect_write(repo: &mut MockMovieRepo, expected: ScoreState, next: ScoreState) {
        repo.expect_update_score()
            .with(always(), eq(expected), eq(next))
            .times(1)
            .returning(move |id, _, next| {
                Ok(Some(stored_movie(id.as_i64(), "Matrix").with_score(next.score, next.max)))
            });
    }

    #[tokio::test]
    async fn increment_up_to_max_is_accepted() {
        let mut repo = repo_holding(3, 10);
        expect_write(&mut repo, state(3, 10), state(10, 10));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let movie = use_case.increment(MovieId::from_i64(1), qty(7)).await.unwrap();

        assert_eq!(movie.score(), 10);
        assert_eq!(movie.max(), 10);
    }

    #[tokio::test]
    async fn increment_past_max_is_rejected_without_writing() {
        let repo = repo_holding(3, 10);
        // No update_score expected

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case.increment(MovieId::from_i64(1), qty(8)).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::ScoreExceeded { id, quantity: 8 } if id == MovieId::from_i64(1)
        ));
    }

    #[tokio::test]
    async fn fresh_movie_cannot_gain_score() {
        let repo = repo_holding(0, 0);

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case.increment(MovieId::from_i64(1), qty(1)).await.unwrap_err();

        assert!(matches!(err, CatalogError::ScoreExceeded { .. }));
    }

    #[tokio::test]
    async fn decrement_that_stays_positive_is_accepted() {
        let mut repo = repo_holding(5, 10);
        expect_write(&mut repo, state(5, 10), state(1, 10));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let movie = use_case.decrement(MovieId::from_i64(1), qty(4)).await.unwrap();

        assert_eq!(movie.score(), 1);
    }

    #[tokio::test]
    async fn decrement_to_zero_is_rejected() {
        let repo = repo_holding(5, 10);

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case.decrement(MovieId::from_i64(1), qty(5)).await.unwrap_err();

        assert!(matches!(err, CatalogError::ScoreExceeded { quantity: 5, .. }));
    }

    #[tokio::test]
    async fn ceiling_below_score_is_rejected() {
        let repo = repo_holding(6, 10);

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case
            .set_ceiling(MovieId::from_i64(1), ScoreCeiling::new(5).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::InvalidCeiling { max: 5, score: 6, .. }
        ));
    }

    #[tokio::test]
    async fn ceiling_can_be_raised() {
        let mut repo = repo_holding(0, 0);
        expect_write(&mut repo, state(0, 0), state(0, 100));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let movie = use_case
            .set_ceiling(MovieId::from_i64(1), ScoreCeiling::new(100).unwrap())
            .await
            .unwrap();

        assert_eq!(movie.max(), 100);
        assert_eq!(movie.score(), 0);
    }

    #[tokio::test]
    async fn unknown_movie_is_not_found() {
        let mut repo = MockMovieRepo::new();
        repo.expect_get().with(eq(MovieId::from_i64(7))).returning(|_| Ok(None));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case.increment(MovieId::from_i64(7), qty(1)).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lost_race_retries_with_fresh_values() {
        let mut repo = MockMovieRepo::new();
        let mut reads = 0;
        repo.expect_get().times(2).returning(move |id| {
            reads += 1;
            // A concurrent writer moved the score between the two reads
            let score = if reads == 1 { 3 } else { 4 };
            Ok(Some(stored_movie(id.as_i64(), "Matrix").with_score(score, 10)))
        });
        repo.expect_update_score()
            .with(always(), eq(state(3, 10)), eq(state(5, 10)))
            .times(1)
            .returning(|_, _, _| Ok(None));
        expect_write(&mut repo, state(4, 10), state(6, 10));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let movie = use_case.increment(MovieId::from_i64(1), qty(2)).await.unwrap();

        assert_eq!(movie.score(), 6);
    }

    #[tokio::test]
    async fn gives_up_after_configured_attempts() {
        let mut repo = repo_holding(3, 10);
        repo.expect_update_score()
            .times(2)
            .returning(|_, _, _| Ok(None));

        let use_case = AdjustScore::new(Arc::new(repo), 2);
        let err = use_case.increment(MovieId::from_i64(1), qty(1)).await.unwrap_err();

        assert!(matches!(err, CatalogError::Repo(RepoError::Conflict { .. })));
    }

    #[tokio::test]
    async fn delete_during_retry_is_not_found() {
        let mut repo = MockMovieRepo::new();
        let mut reads = 0;
        repo.expect_get().returning(move |id| {
            reads += 1;
            Ok((reads == 1).then(|| stored_movie(id.as_i64(), "Matrix").with_score(3, 10)))
        });
        repo.expect_update_score()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let use_case = AdjustScore::new(Arc::new(repo), 5);
        let err = use_case.increment(MovieId::from_i64(1), qty(1)).await.unwrap_err();

        assert!(err.is_not_found());
    }
}
