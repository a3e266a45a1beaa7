//! In-process implementation of the character repository.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{Character, CharacterPatch};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// Character store kept in memory for the lifetime of the process.
///
/// Records keep their insertion order. Ids are unique: [`add`] refuses a
/// record whose id is already stored.
///
/// [`add`]: CharacterRepository::add
#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<Vec<Character>>,
}

impl InMemoryCharacterRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository preloaded with `characters`.
    ///
    /// # Errors
    ///
    /// Returns an error if two characters share an id.
    pub fn with_characters(characters: Vec<Character>) -> Result<Self> {
        if let Some(id) = first_duplicate_id(&characters) {
            bail!("duplicate character id '{id}' in seed data");
        }

        Ok(Self {
            characters: RwLock::new(characters),
        })
    }

    /// Creates a repository preloaded from a JSON file holding an array of
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// characters, or contains duplicate ids.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;

        let characters: Vec<Character> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        info!(count = characters.len(), path = %path.display(), "Seeding characters");

        Self::with_characters(characters)
    }
}

fn first_duplicate_id(characters: &[Character]) -> Option<String> {
    let mut seen = HashSet::new();
    characters
        .iter()
        .find(|c| !seen.insert(c.id.as_str()))
        .map(|c| c.id.clone())
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn find_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(self.characters.read().await.clone())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Character>, AppError> {
        let characters = self.characters.read().await;

        Ok(characters.iter().find(|c| c.id == id).cloned())
    }

    async fn add(&self, character: Character) -> Result<Option<Character>, AppError> {
        let mut characters = self.characters.write().await;

        if characters.iter().any(|c| c.id == character.id) {
            debug!(id = %character.id, "refusing duplicate character id");
            return Ok(None);
        }

        characters.push(character.clone());
        Ok(Some(character))
    }

    async fn update(&self, patch: CharacterPatch) -> Result<Option<Character>, AppError> {
        let mut characters = self.characters.write().await;

        let Some(character) = characters.iter_mut().find(|c| c.id == patch.id) else {
            return Ok(None);
        };

        character.apply(patch);
        Ok(Some(character.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Character>, AppError> {
        let mut characters = self.characters.write().await;

        let removed = characters
            .iter()
            .position(|c| c.id == id)
            .map(|index| characters.remove(index));

        Ok(removed)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.characters.read().await.len())
    }
}
