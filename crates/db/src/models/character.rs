//! Character entity model and projections.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub rarity: i64,
    pub element: String,
    pub weapon: String,
}

/// The id-less projection of a character.
///
/// The list endpoint returns a mapping keyed by id, so repeating the id in
/// each value would be redundant; this is the value type of that mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFields {
    pub name: String,
    pub rarity: i64,
    pub element: String,
    pub weapon: String,
}

impl From<Character> for CharacterFields {
    fn from(character: Character) -> Self {
        CharacterFields {
            name: character.name,
            rarity: character.rarity,
            element: character.element,
            weapon: character.weapon,
        }
    }
}
