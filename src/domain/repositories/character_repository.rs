//! Repository trait for character data access.

use crate::domain::entities::{Character, CharacterPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for character records.
///
/// Every lookup that can miss reports the miss as `Ok(None)`; callers decide
/// how to surface it. `Err` is reserved for failures of the store itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCharacterRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Returns every stored character in insertion order.
    async fn find_all(&self) -> Result<Vec<Character>, AppError>;

    /// Finds a character by id.
    async fn find_one(&self, id: &str) -> Result<Option<Character>, AppError>;

    /// Stores a new character.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Character))` with the stored copy
    /// - `Ok(None)` if the store refused the record (for example a duplicate id)
    async fn add(&self, character: Character) -> Result<Option<Character>, AppError>;

    /// Applies a partial update to the character named by `patch.id`.
    ///
    /// Returns `Ok(None)` if no character has that id.
    async fn update(&self, patch: CharacterPatch) -> Result<Option<Character>, AppError>;

    /// Removes a character, returning the removed record.
    ///
    /// Returns `Ok(None)` if no character has that id.
    async fn delete(&self, id: &str) -> Result<Option<Character>, AppError>;

    /// Counts stored characters.
    async fn count(&self) -> Result<usize, AppError>;
}
