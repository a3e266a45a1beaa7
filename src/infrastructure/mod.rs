//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;
