//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into controller operations and writes
//! their outcomes as responses.
//!
//! # Modules
//!
//! - [`dto`] - Response DTOs
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Input sanitization, rate limiting and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
