//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the contracts defined by the domain and
//! application layers.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`session`] - Admin session stores (Redis and in-memory)

pub mod persistence;
pub mod session;
