//! # Character Service
//!
//! A small REST service for character records built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Character entity, sanitized input and repository trait
//! - **Application Layer** ([`application`]) - The CRUD controller and its outcome type
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Request Pipeline
//!
//! 1. [`api::middleware::sanitize`] copies allow-listed, present fields from
//!    the body into a [`domain::entities::SanitizedInput`] (create/update only)
//! 2. A handler calls [`application::services::CharacterService`]
//! 3. The service calls the injected [`domain::repositories::CharacterRepository`]
//! 4. The returned [`application::Outcome`] is written as the response
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_PATH="./seed/characters.json"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CharacterService;
    pub use crate::application::{Outcome, Payload, ResponseBody};
    pub use crate::domain::entities::{Character, CharacterPatch, SanitizedInput};
    pub use crate::domain::repositories::CharacterRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryCharacterRepository;
    pub use crate::state::AppState;
}
