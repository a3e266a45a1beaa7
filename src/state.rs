//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::CharacterService;
use crate::domain::repositories::CharacterRepository;

/// Default maximum request body read by the input sanitizer, in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub character_service: Arc<CharacterService<dyn CharacterRepository>>,
    /// Maximum request body size read by the input sanitizer.
    pub body_limit: usize,
}

impl AppState {
    /// Builds the state around an injected repository.
    pub fn new(repository: Arc<dyn CharacterRepository>, body_limit: usize) -> Self {
        Self {
            character_service: Arc::new(CharacterService::new(repository)),
            body_limit,
        }
    }
}
