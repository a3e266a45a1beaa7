//! Application layer implementing the character resource controller.
//!
//! Services consume repository traits and return transport-agnostic
//! [`Outcome`] values that the HTTP layer writes out.
//!
//! # Modules
//!
//! - [`services::character_service::CharacterService`] - The five CRUD operations
//! - [`outcome`] - Success / not-found outcome type and response messages

pub mod outcome;
pub mod services;

pub use outcome::{Outcome, Payload, ResponseBody};
