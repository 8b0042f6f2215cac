//! Repository for the `characters` table.

use roster_core::types::DbId;
use roster_core::validation::CharacterPayload;

use crate::models::character::Character;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rarity, element, weapon";

/// Provides CRUD operations for characters.
///
/// All ids are client-assigned: `create` takes the id explicitly rather than
/// relying on the database to generate one. A duplicate id surfaces as a
/// unique-violation `sqlx::Error`; callers decide how to report it.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character with an explicit id, returning the created row.
    pub async fn create(
        pool: &DbPool,
        id: DbId,
        payload: &CharacterPayload,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (id, name, rarity, element, weapon)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&payload.name)
            .bind(payload.rarity)
            .bind(&payload.element)
            .bind(&payload.weapon)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its primary key.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find every character with the given (already normalized) name.
    ///
    /// Names are not unique in the schema, so this returns all matches and
    /// lets the caller decide whether more than one is an error.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// List all characters, ordered by id ascending.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Overwrite every non-id field of a character (full-replace semantics).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        payload: &CharacterPayload,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET name = $2, rarity = $3, element = $4, weapon = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&payload.name)
            .bind(payload.rarity)
            .bind(&payload.element)
            .bind(&payload.weapon)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
