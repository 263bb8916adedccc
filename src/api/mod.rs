//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into alias store operations and renders the
//! uniform status envelope.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Basic auth and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
