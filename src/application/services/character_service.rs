//! Character resource controller.

use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::outcome::{
    CREATED_MESSAGE, DELETED_MESSAGE, Outcome, Payload, UPDATED_MESSAGE,
};
use crate::domain::entities::{Character, CharacterPatch, SanitizedInput};
use crate::domain::repositories::CharacterRepository;
use crate::error::AppError;

/// List, read, create, update and delete operations for characters.
///
/// Holds no state besides the injected repository. Each operation makes a
/// single repository call and maps its result to an [`Outcome`]; a missing
/// record becomes [`Outcome::NotFound`], while repository failures propagate
/// as [`AppError`].
pub struct CharacterService<R: CharacterRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CharacterRepository + ?Sized> CharacterService<R> {
    /// Creates a new character service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every character.
    ///
    /// An empty repository yields `{data: []}`, never a not-found outcome.
    pub async fn list_all(&self) -> Result<Outcome, AppError> {
        let characters = self.repository.find_all().await?;

        Ok(Outcome::success(
            StatusCode::OK,
            None,
            Some(Payload::Many(characters)),
        ))
    }

    /// Fetches a character by id.
    ///
    /// The id is forwarded to the repository unvalidated.
    pub async fn get_by_id(&self, id: &str) -> Result<Outcome, AppError> {
        match self.repository.find_one(id).await? {
            Some(character) => Ok(Outcome::success(
                StatusCode::OK,
                None,
                Some(Payload::One(character)),
            )),
            None => {
                debug!(id, "character not found");
                Ok(Outcome::not_found())
            }
        }
    }

    /// Creates a character from sanitized input.
    ///
    /// The response echoes the record built here, not the repository's copy,
    /// and is `201 Created` whatever the repository answered.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field has the wrong type.
    pub async fn create(&self, input: &SanitizedInput) -> Result<Outcome, AppError> {
        let character = Character::from_input(input)?;

        if self.repository.add(character.clone()).await?.is_none() {
            warn!(id = %character.id, "repository did not store the new character");
        }

        Ok(Outcome::success(
            StatusCode::CREATED,
            Some(CREATED_MESSAGE),
            Some(Payload::One(character)),
        ))
    }

    /// Applies a partial update to the character at `id`.
    ///
    /// `id` replaces any `id` carried by the input. The response carries the
    /// record returned by the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field has the wrong type.
    pub async fn update(&self, id: &str, mut input: SanitizedInput) -> Result<Outcome, AppError> {
        input.set_id(id);
        let patch = CharacterPatch::from_input(&input)?;

        match self.repository.update(patch).await? {
            Some(character) => Ok(Outcome::success(
                StatusCode::OK,
                Some(UPDATED_MESSAGE),
                Some(Payload::One(character)),
            )),
            None => {
                debug!(id, "character not found for update");
                Ok(Outcome::not_found())
            }
        }
    }

    /// Deletes the character at `id`.
    ///
    /// The success body carries only a message.
    pub async fn delete(&self, id: &str) -> Result<Outcome, AppError> {
        match self.repository.delete(id).await? {
            Some(_) => Ok(Outcome::success(StatusCode::OK, Some(DELETED_MESSAGE), None)),
            None => {
                debug!(id, "character not found for delete");
                Ok(Outcome::not_found())
            }
        }
    }

    /// Counts stored characters.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
