//! Admin session storage.
//!
//! Provides a [`SessionStore`] trait with two implementations:
//! - [`RedisSessionStore`] - Shared sessions in Redis, surviving restarts
//! - [`InMemorySessionStore`] - Process-local map for single-instance deployments and tests

mod memory;
mod redis_store;
mod service;

pub use memory::InMemorySessionStore;
pub use redis_store::RedisSessionStore;
pub use service::{SessionError, SessionResult, SessionStore};
