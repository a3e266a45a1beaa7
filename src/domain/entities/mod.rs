//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Character`] - A stored character record
//! - [`CharacterPatch`] - Partial update addressed by `id`
//! - [`SanitizedInput`] - Allow-listed request fields, valid for one request
//!
//! Typed records are built from [`SanitizedInput`] through
//! [`Character::from_input`] and [`CharacterPatch::from_input`].

pub mod character;
pub mod sanitized_input;

pub use character::{Character, CharacterPatch};
pub use sanitized_input::{ALLOWED_FIELDS, SanitizedInput};
