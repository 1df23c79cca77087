//! shorturl - A small in-memory URL shortener service
//!
//! Accepts a long URL, binds it to a 6-character alphanumeric code and
//! resolves the code back with a 302 redirect while counting clicks.
//! All state lives in memory and is lost on restart.
//!
//! # Architecture
//! - `storage`: `UrlMapping` and the concurrent `MappingStore`
//! - `services`: short code generation and link operations
//! - `api`: HTTP handlers and route registration
//! - `config`: Configuration management
//! - `runtime`: HTTP server startup
//! - `system`: Logging

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
