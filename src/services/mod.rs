//! Service layer for business logic
//!
//! Code generation and the link operations used by the HTTP handlers.

pub mod code_generator;
mod link_service;

pub use code_generator::{
    CodeGenerationError, CodeGenerator, CodeSource, MAX_ATTEMPTS, RandomSource,
};
pub use link_service::*;
