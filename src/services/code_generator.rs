//! Short code generation
//!
//! 随机抽取 6 位 62 进制短码，遇到冲突则重新抽取，最多尝试 100 次。
//! 62^6 ≈ 5.68e10，在存储量远小于该空间时冲突概率可以忽略。

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{MappingStore, UrlMapping};
use crate::utils::{SHORT_CODE_LENGTH, generate_random_code};

/// 最大尝试次数
pub const MAX_ATTEMPTS: usize = 100;

/// Source of candidate codes.
pub trait CodeSource: Send + Sync {
    fn draw(&self, length: usize) -> String;
}

/// Uniformly random codes from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl CodeSource for RandomSource {
    fn draw(&self, length: usize) -> String {
        generate_random_code(length)
    }
}

/// 短码空间耗尽（容量问题，而非客户端错误）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenerationError {
    pub attempts: usize,
}

impl fmt::Display for CodeGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to generate unique short code after {} attempts",
            self.attempts
        )
    }
}

impl std::error::Error for CodeGenerationError {}

pub struct CodeGenerator {
    source: Arc<dyn CodeSource>,
    length: usize,
    max_attempts: usize,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_source(Arc::new(RandomSource))
    }

    pub fn with_source(source: Arc<dyn CodeSource>) -> Self {
        Self {
            source,
            length: SHORT_CODE_LENGTH,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Return a code that is absent from `store` at the moment of the check.
    ///
    /// The result is not reserved; a concurrent writer may still take it
    /// before the caller stores it. Use [`CodeGenerator::claim`] to bind a
    /// code atomically.
    pub fn generate(&self, store: &MappingStore) -> Result<String, CodeGenerationError> {
        for attempt in 1..=self.max_attempts {
            let code = self.source.draw(self.length);
            if !store.exists(&code) {
                debug!("CodeGenerator: generated '{}' after {} attempt(s)", code, attempt);
                return Ok(code);
            }
            debug!("CodeGenerator: collision on '{}'", code);
        }

        warn!(
            "CodeGenerator: gave up after {} attempts, store holds {} codes",
            self.max_attempts,
            store.len()
        );
        Err(CodeGenerationError {
            attempts: self.max_attempts,
        })
    }

    /// Draw a fresh code and bind `original_url` to it in one atomic insert.
    ///
    /// A lost insert race counts as a collision and triggers a new draw.
    pub fn claim(
        &self,
        store: &MappingStore,
        original_url: &str,
    ) -> Result<UrlMapping, CodeGenerationError> {
        for attempt in 1..=self.max_attempts {
            let code = self.source.draw(self.length);
            let mapping = UrlMapping::new(original_url, code.as_str());
            if store.insert_if_absent(&code, mapping.clone()) {
                debug!("CodeGenerator: claimed '{}' after {} attempt(s)", code, attempt);
                return Ok(mapping);
            }
            debug!("CodeGenerator: collision on '{}'", code);
        }

        warn!(
            "CodeGenerator: gave up after {} attempts, store holds {} codes",
            self.max_attempts,
            store.len()
        );
        Err(CodeGenerationError {
            attempts: self.max_attempts,
        })
    }
}
