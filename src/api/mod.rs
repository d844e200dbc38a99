//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, rate limiting, and tracing
//! - [`routes`] - Route groups composed in [`crate::routes`]

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
