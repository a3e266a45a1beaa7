//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod character_repository;

pub use character_repository::CharacterRepository;

#[cfg(test)]
pub use character_repository::MockCharacterRepository;
