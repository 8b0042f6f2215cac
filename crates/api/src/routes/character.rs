//! Route definitions for the `/characters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /            -> list (mapping id -> fields)
/// GET    /{key}       -> get_by_key (numeric id or name)
/// POST   /{id}        -> create (client-assigned id)
/// PUT    /{id}        -> update (full replace)
/// PATCH  /{id}        -> update (alias of PUT, no partial semantics)
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(character::list)).route(
        "/{key}",
        get(character::get_by_key)
            .post(character::create)
            .put(character::update)
            .patch(character::update)
            .delete(character::delete),
    )
}
