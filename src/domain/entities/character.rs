//! Character entity and the typed shapes built from sanitized input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sanitized_input::SanitizedInput;
use crate::error::AppError;

/// A playable character record.
///
/// `id` uniquely identifies the record within a repository. JSON field names
/// are camelCase (`characterClass`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub character_class: String,
    pub level: i64,
    pub hp: i64,
    pub mana: i64,
    pub attack: i64,
    pub items: Vec<String>,
}

impl Character {
    /// Creates a new Character instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        character_class: impl Into<String>,
        level: i64,
        hp: i64,
        mana: i64,
        attack: i64,
        items: Vec<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            character_class: character_class.into(),
            level,
            hp,
            mana,
            attack,
            items,
        }
    }

    /// Builds a record from sanitized request fields.
    ///
    /// Absent fields take their defaults: empty strings, zero stats, no items,
    /// and a freshly generated UUID v4 for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a present field has the wrong type.
    pub fn from_input(input: &SanitizedInput) -> Result<Self, AppError> {
        let draft: CharacterDraft = input.decode()?;

        Ok(Self {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: draft.name.unwrap_or_default(),
            character_class: draft.character_class.unwrap_or_default(),
            level: draft.level.unwrap_or_default(),
            hp: draft.hp.unwrap_or_default(),
            mana: draft.mana.unwrap_or_default(),
            attack: draft.attack.unwrap_or_default(),
            items: draft.items.unwrap_or_default(),
        })
    }

    /// Overwrites the fields carried by `patch`, leaving the others unchanged.
    ///
    /// The patch `id` only selects the record; it is never written.
    pub fn apply(&mut self, patch: CharacterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(character_class) = patch.character_class {
            self.character_class = character_class;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(hp) = patch.hp {
            self.hp = hp;
        }
        if let Some(mana) = patch.mana {
            self.mana = mana;
        }
        if let Some(attack) = patch.attack {
            self.attack = attack;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterDraft {
    id: Option<String>,
    name: Option<String>,
    character_class: Option<String>,
    level: Option<i64>,
    hp: Option<i64>,
    mana: Option<i64>,
    attack: Option<i64>,
    items: Option<Vec<String>>,
}

/// Partial update addressed to an existing character.
///
/// All fields besides `id` are optional; `None` leaves the stored value as is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    pub id: String,
    pub name: Option<String>,
    pub character_class: Option<String>,
    pub level: Option<i64>,
    pub hp: Option<i64>,
    pub mana: Option<i64>,
    pub attack: Option<i64>,
    pub items: Option<Vec<String>>,
}

impl CharacterPatch {
    /// Decodes a patch from sanitized fields that already carry an `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is missing or a field has the
    /// wrong type.
    pub fn from_input(input: &SanitizedInput) -> Result<Self, AppError> {
        input.decode()
    }

    /// A patch that only names the record, changing nothing.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            character_class: None,
            level: None,
            hp: None,
            mana: None,
            attack: None,
            items: None,
        }
    }
}
