//! SQLite-backed movie storage.

use async_trait::async_trait;
use movieflix_domain::{
    Counter, Genre, Movie, MovieData, MovieDescription, MovieId, MovieName, ReleaseYear,
    ScoreState,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{MovieRepo, RepoError};

const ENTITY: &str = "Movie";

/// Columns returned by every query that yields a movie.
const MOVIE_COLUMNS: &str =
    "id, name, description, year, genre, views, likes, dislikes, max_score, score";

/// SQLite implementation of the movie record store.
pub struct SqliteMovieRepo {
    pool: SqlitePool,
}

impl SqliteMovieRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("movies.connect", e))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                year INTEGER NOT NULL CHECK (year >= 1888),
                genre TEXT NOT NULL,
                views INTEGER NOT NULL DEFAULT 0 CHECK (views BETWEEN 0 AND 999999999999),
                likes INTEGER NOT NULL DEFAULT 0 CHECK (likes BETWEEN 0 AND 999999999999),
                dislikes INTEGER NOT NULL DEFAULT 0 CHECK (dislikes BETWEEN 0 AND 999999999999),
                max_score INTEGER NOT NULL DEFAULT 0 CHECK (max_score BETWEEN 0 AND 1000),
                score INTEGER NOT NULL DEFAULT 0 CHECK (score BETWEEN 0 AND max_score)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("movies.schema", e))?;

        Ok(Self { pool })
    }
}

/// Translate a driver error, keeping constraint violations distinguishable.
fn write_error(operation: &'static str, key: &str, err: sqlx::Error) -> RepoError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return RepoError::already_exists(ENTITY, key);
        }
        if db_err.is_check_violation() {
            return RepoError::constraint(format!("{} rejected for {}: {}", operation, key, db_err));
        }
    }
    RepoError::database(operation, err)
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::serialization(format!("column {}: {}", name, e)))
}

fn unsigned<T: TryFrom<i64>>(row: &SqliteRow, name: &str) -> Result<T, RepoError> {
    let raw: i64 = column(row, name)?;
    T::try_from(raw)
        .map_err(|_| RepoError::serialization(format!("column {} out of range: {}", name, raw)))
}

/// Map a stored row back into a domain movie.
fn row_to_movie(row: &SqliteRow) -> Result<Movie, RepoError> {
    let id: i64 = column(row, "id")?;
    let name: String = column(row, "name")?;
    let description: String = column(row, "description")?;
    let year: i64 = column(row, "year")?;
    let genre: String = column(row, "genre")?;

    let year = i32::try_from(year)
        .map_err(|_| RepoError::serialization(format!("year out of range: {}", year)))?;
    let data = MovieData::new(
        MovieName::new(name).map_err(RepoError::serialization)?,
        MovieDescription::new(description).map_err(RepoError::serialization)?,
        ReleaseYear::new(year).map_err(RepoError::serialization)?,
        genre.parse::<Genre>().map_err(RepoError::serialization)?,
    );
    let score = ScoreState::new(unsigned(row, "score")?, unsigned(row, "max_score")?)
        .map_err(RepoError::serialization)?;

    Ok(Movie::from_parts(
        MovieId::from_i64(id),
        data,
        unsigned(row, "views")?,
        unsigned(row, "likes")?,
        unsigned(row, "dislikes")?,
        score,
    ))
}

#[async_trait]
impl MovieRepo for SqliteMovieRepo {
    async fn save(&self, data: &MovieData) -> Result<Movie, RepoError> {
        let query = format!(
            "INSERT INTO movies (name, description, year, genre) VALUES (?, ?, ?, ?) RETURNING {}",
            MOVIE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(data.name.as_str())
            .bind(data.description.as_str())
            .bind(data.year.value())
            .bind(data.genre.as_tag())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error("movies.save", data.name.as_str(), e))?;

        row_to_movie(&row)
    }

    async fn get(&self, id: MovieId) -> Result<Option<Movie>, RepoError> {
        let query = format!("SELECT {} FROM movies WHERE id = ?", MOVIE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies.get", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Movie>, RepoError> {
        let query = format!("SELECT {} FROM movies WHERE name = ?", MOVIE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies.find_by_name", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn list(&self) -> Result<Vec<Movie>, RepoError> {
        let query = format!("SELECT {} FROM movies ORDER BY id", MOVIE_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies.list", e))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn delete(&self, id: MovieId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found(ENTITY, id));
        }
        Ok(())
    }

    async fn increment_counter(
        &self,
        id: MovieId,
        counter: Counter,
    ) -> Result<Option<Movie>, RepoError> {
        let column = counter.as_str();
        let query = format!(
            "UPDATE movies SET {column} = {column} + 1 WHERE id = ? RETURNING {}",
            MOVIE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error("movies.increment_counter", &id.to_string(), e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn update_score(
        &self,
        id: MovieId,
        expected: ScoreState,
        next: ScoreState,
    ) -> Result<Option<Movie>, RepoError> {
        let query = format!(
            "UPDATE movies SET score = ?, max_score = ? \
             WHERE id = ? AND score = ? AND max_score = ? RETURNING {}",
            MOVIE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(i64::from(next.score))
            .bind(i64::from(next.max))
            .bind(id.as_i64())
            .bind(i64::from(expected.score))
            .bind(i64::from(expected.max))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error("movies.update_score", &id.to_string(), e))?;

        row.as_ref().map(row_to_movie).transpose()
    }
}
