//! Handlers for character endpoints.
//!
//! Each handler forwards to [`crate::application::services::CharacterService`]
//! and writes the returned [`Outcome`] as the response.

use axum::{
    Extension,
    extract::{Path, State},
};

use crate::application::Outcome;
use crate::domain::entities::SanitizedInput;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all characters.
///
/// # Endpoint
///
/// `GET /api/characters`
///
/// # Response
///
/// ```json
/// { "data": [ { "id": "1", "name": "John", "characterClass": "Mage", ... } ] }
/// ```
pub async fn list_characters_handler(State(state): State<AppState>) -> Result<Outcome, AppError> {
    state.character_service.list_all().await
}

/// Returns a single character.
///
/// # Endpoint
///
/// `GET /api/characters/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Character not found"}` if no character has the id.
pub async fn get_character_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Outcome, AppError> {
    state.character_service.get_by_id(&id).await
}

/// Creates a character from the sanitized request body.
///
/// # Endpoint
///
/// `POST /api/characters`
///
/// Requires [`crate::api::middleware::sanitize::layer`] on the route.
///
/// # Errors
///
/// Returns 400 if a field has the wrong JSON type.
pub async fn create_character_handler(
    State(state): State<AppState>,
    Extension(input): Extension<SanitizedInput>,
) -> Result<Outcome, AppError> {
    state.character_service.create(&input).await
}

/// Partially updates a character.
///
/// # Endpoint
///
/// `PATCH /api/characters/{id}` or `PUT /api/characters/{id}`
///
/// The path id takes precedence over any `id` in the body. Requires
/// [`crate::api::middleware::sanitize::layer`] on the route.
///
/// # Errors
///
/// Returns 400 if a field has the wrong JSON type.
/// Returns 404 `{"message": "Character not found"}` if no character has the id.
pub async fn update_character_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Extension(input): Extension<SanitizedInput>,
) -> Result<Outcome, AppError> {
    state.character_service.update(&id, input).await
}

/// Deletes a character.
///
/// # Endpoint
///
/// `DELETE /api/characters/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Character not found"}` if no character has the id.
pub async fn delete_character_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Outcome, AppError> {
    state.character_service.delete(&id).await
}
