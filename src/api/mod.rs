//! HTTP API
//!
//! Handlers, response types and route registration.

pub mod services;

pub use services::configure_routes;
