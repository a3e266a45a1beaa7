//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryCharacterRepository`] - Character storage held in process memory,
//!   optionally seeded from a JSON file at startup

pub mod in_memory_character_repository;

pub use in_memory_character_repository::InMemoryCharacterRepository;
