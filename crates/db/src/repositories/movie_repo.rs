//! Repository for the `movies` and `movie_genres` tables.

use cinema_core::error::CoreError;
use cinema_core::movie::{parse_movie_id, validate_new_movie, MOVIE_ENTITY};
use cinema_core::types::DbId;
use indexmap::IndexMap;
use sqlx::PgPool;

use crate::constraint::classify_foreign_key;
use crate::error::DbError;
use crate::models::genre::Genre;
use crate::models::movie::{CreateMovie, Movie, MovieGenreRow, MovieWithGenres};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, title, description, poster_url, created_at";

/// Movies joined with their genres, newest first.
const JOINED_SELECT: &str = "\
    SELECT m.id, m.title, m.description, m.poster_url, m.created_at, \
           g.id AS genre_id, g.name AS genre_name \
    FROM movies m \
    LEFT JOIN movie_genres mg ON mg.movie_id = m.id \
    LEFT JOIN genres g ON g.id = mg.genre_id";

/// Provides create, list, and delete operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Validate and insert a movie together with its genre associations.
    ///
    /// The movie row and every `movie_genres` row are written in one
    /// transaction. A genre id that does not exist aborts the whole
    /// transaction with [`CoreError::Reference`].
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, DbError> {
        let new = validate_new_movie(
            &input.title,
            &input.description,
            input.poster_url.as_deref(),
            &input.genre_ids,
        )?;

        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO movies (id, title, description, poster_url, created_at) \
             VALUES ($1, $2, $3, $4, now()) \
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&insert_query)
            .bind(DbId::new_v4())
            .bind(&new.title)
            .bind(&new.description)
            .bind(&new.poster_url)
            .fetch_one(&mut *tx)
            .await?;

        for &genre_id in &new.genre_ids {
            sqlx::query("INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)")
                .bind(movie.id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    classify_foreign_key(e, |_| {
                        CoreError::Reference("one or more genreIds do not exist".to_string())
                    })
                })?;
        }

        tx.commit().await?;
        Ok(movie)
    }

    /// List every movie with its genres, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieWithGenres>, DbError> {
        let query = format!("{JOINED_SELECT} ORDER BY m.created_at DESC, m.id, g.name");
        let rows = sqlx::query_as::<_, MovieGenreRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(group_movie_rows(rows))
    }

    /// Find a single movie with its genres.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieWithGenres>, DbError> {
        let query = format!("{JOINED_SELECT} WHERE m.id = $1 ORDER BY g.name");
        let rows = sqlx::query_as::<_, MovieGenreRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(group_movie_rows(rows).into_iter().next())
    }

    /// Delete a movie by the id taken from a request path.
    ///
    /// Genre associations are removed by cascade. Dependent records that do
    /// not cascade (showtimes, reservations) block the delete with
    /// [`CoreError::Conflict`].
    pub async fn delete(pool: &PgPool, raw_id: &str) -> Result<(), DbError> {
        let id = parse_movie_id(raw_id)?;

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                classify_foreign_key(e, |_| {
                    CoreError::Conflict(
                        "cannot delete movie: there are dependent records \
                         (showtimes/reservations). Please remove them first."
                            .to_string(),
                    )
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: MOVIE_ENTITY,
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Fold ordered join rows into movies with their genres.
///
/// Movies keep the order in which their first row appears; genres keep row
/// order within each movie.
pub fn group_movie_rows(rows: Vec<MovieGenreRow>) -> Vec<MovieWithGenres> {
    let grouped = rows.into_iter().fold(
        IndexMap::<DbId, MovieWithGenres>::new(),
        |mut acc, row| {
            let entry = acc.entry(row.id).or_insert_with(|| MovieWithGenres {
                movie: Movie {
                    id: row.id,
                    title: row.title,
                    description: row.description,
                    poster_url: row.poster_url,
                    created_at: row.created_at,
                },
                genres: Vec::new(),
            });
            if let (Some(id), Some(name)) = (row.genre_id, row.genre_name) {
                entry.genres.push(Genre { id, name });
            }
            acc
        },
    );
    grouped.into_values().collect()
}
