//! Repository for the `films` table.

use dvdrental_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::film::{CreateFilm, Film, FilmAvailability};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, release_year, rental_duration, rental_rate, \
    length_minutes, replacement_cost, rating, created_at, updated_at";

/// Provides catalog queries for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films (title, description, release_year, rental_duration, \
                rental_rate, length_minutes, replacement_cost, rating) \
             VALUES ($1, $2, $3, COALESCE($4, 3), COALESCE($5, 4.99), $6, \
                COALESCE($7, 19.99), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_year)
            .bind(input.rental_duration)
            .bind(input.rental_rate)
            .bind(input.length_minutes)
            .bind(input.replacement_cost)
            .bind(&input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a film by its internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List films ordered by ID.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films ORDER BY id LIMIT $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count total, rented and available copies of a film.
    ///
    /// Returns `None` if the film does not exist.
    pub async fn availability(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Option<FilmAvailability>, sqlx::Error> {
        let row: Option<(i64, i64)> = sqlx::query_as(
            "SELECT \
                (SELECT COUNT(*) FROM inventory i WHERE i.film_id = f.id), \
                (SELECT COUNT(*) FROM rentals r \
                    JOIN inventory i ON i.id = r.inventory_id \
                    WHERE i.film_id = f.id AND r.return_date IS NULL) \
             FROM films f WHERE f.id = $1",
        )
        .bind(film_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|(total_copies, rented_copies)| FilmAvailability {
            film_id,
            total_copies,
            rented_copies,
            available_copies: total_copies - rented_copies,
        }))
    }
}
