//! HTTP middleware for request processing and protection.
//!
//! Provides input sanitization, rate limiting, and observability middleware.

pub mod rate_limit;
pub mod sanitize;
pub mod tracing;
