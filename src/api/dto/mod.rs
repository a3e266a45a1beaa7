//! Data Transfer Objects for API responses.
//!
//! Character bodies are produced by [`crate::application::Outcome`]; this
//! module holds the remaining response shapes.

pub mod health;
