//! HTTP middleware for request processing and protection.
//!
//! Basic-auth protection and request tracing, plus the per-request deadline.

pub mod auth;
pub mod timeout;
pub mod tracing;
