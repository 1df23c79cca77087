//! Application runtime
//!
//! Builds the shared state and runs the HTTP server.

pub mod server;

pub use server::{AppState, run_server};
