//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod characters;
pub mod health;

pub use characters::{
    create_character_handler, delete_character_handler, get_character_handler,
    list_characters_handler, update_character_handler,
};
pub use health::health_handler;
