//! Handlers for the `/characters` resource.
//!
//! Ids are client-assigned: the path segment names the id on create, so
//! there is no server-side id generation. The path segment on GET doubles
//! as a name lookup when it is not numeric.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::naming::normalize_name;
use roster_core::types::DbId;
use roster_core::validation::CharacterPayload;
use roster_db::models::character::{Character, CharacterFields};
use roster_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a path segment that must be a numeric id.
fn parse_id(segment: &str) -> Result<DbId, AppError> {
    segment
        .parse()
        .map_err(|_| CoreError::MalformedKey(segment.to_string()).into())
}

/// Validate a write body into a payload.
fn validate(body: &serde_json::Value) -> Result<CharacterPayload, AppError> {
    CharacterPayload::from_json(body)
        .map_err(|errors| CoreError::Validation(errors).into())
}

/// GET /characters
///
/// Returns a mapping from id to the record's remaining fields, ordered by
/// id ascending (BTreeMap keys serialize in numeric order). Empty mapping
/// when the table is empty.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<DbId, CharacterFields>>> {
    let characters = CharacterRepo::list_all(&state.pool).await?;
    let mapping = characters
        .into_iter()
        .map(|c| (c.id, CharacterFields::from(c)))
        .collect();
    Ok(Json(mapping))
}

/// GET /characters/{key}
///
/// A numeric key looks up by primary key; anything else is normalized
/// (lowercased, first character uppercased) and looked up by name. A name
/// shared by several records is ambiguous and reported as a conflict rather
/// than guessing.
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Character>> {
    let character = match key.parse::<DbId>() {
        Ok(id) => CharacterRepo::find_by_id(&state.pool, id).await?,
        Err(_) => {
            let name = normalize_name(&key);
            let mut matches = CharacterRepo::find_by_name(&state.pool, &name).await?;
            if matches.len() > 1 {
                return Err(CoreError::AmbiguousName(name).into());
            }
            matches.pop()
        }
    };

    character
        .map(Json)
        .ok_or_else(|| CoreError::character_not_found(key).into())
}

/// POST /characters/{id}
///
/// Creates a character under the id named by the path. A duplicate id is
/// rejected by the primary-key constraint and surfaces as 409; the existing
/// row is never altered.
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let id = parse_id(&id)?;
    let payload = validate(&body)?;
    let character = CharacterRepo::create(&state.pool, id, &payload).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /characters/{id} and PATCH /characters/{id}
///
/// PATCH is a full alias of PUT: every field is required and the row is
/// fully replaced. Validation runs before the existence check, so a bad
/// body against a missing id is still 422. Success is 200 with an empty
/// body; the updated record is not echoed back.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let payload = validate(&body)?;
    match CharacterRepo::update(&state.pool, id, &payload).await? {
        Some(_) => Ok(StatusCode::OK),
        None => Err(CoreError::character_not_found(id.to_string()).into()),
    }
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if CharacterRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::character_not_found(id.to_string()).into())
    }
}
