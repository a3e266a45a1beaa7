//! Domain layer containing the character model and repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Character record, partial updates and sanitized input
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//! Request handling lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
