//! Link service
//!
//! Business logic shared by the HTTP handlers: shorten, resolve, stats.
//! Input is validated here before any store mutation happens.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::errors::{Result, ShortenerError};
use crate::services::CodeGenerator;
use crate::storage::{MappingStore, UrlMapping};
use crate::utils::is_valid_short_code;
use crate::utils::url_validator::normalize_and_validate;

pub struct LinkService {
    store: Arc<MappingStore>,
    generator: CodeGenerator,
}

impl LinkService {
    pub fn new(store: Arc<MappingStore>) -> Self {
        Self::with_generator(store, CodeGenerator::new())
    }

    pub fn with_generator(store: Arc<MappingStore>, generator: CodeGenerator) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &Arc<MappingStore> {
        &self.store
    }

    /// Normalize and validate `raw_url`, then bind it to a fresh short code.
    pub fn shorten(&self, raw_url: &str) -> Result<UrlMapping> {
        let normalized = normalize_and_validate(raw_url).map_err(|e| {
            debug!("LinkService: rejected URL '{}': {}", raw_url, e);
            ShortenerError::from(e)
        })?;

        let mapping = self
            .generator
            .claim(&self.store, &normalized)
            .map_err(|e| {
                error!("LinkService: {}", e);
                ShortenerError::from(e)
            })?;

        info!(
            "LinkService: created link '{}' -> '{}'",
            mapping.short_code, mapping.original_url
        );
        Ok(mapping)
    }

    /// Look up `code` for a redirect and count the click.
    pub fn resolve(&self, code: &str) -> Result<UrlMapping> {
        self.resolve_with(code, |mapping| Ok(mapping.clone()))
    }

    /// Look up `code`, build the redirect with `respond`, then count the click.
    ///
    /// The click is only counted when `respond` succeeds.
    pub fn resolve_with<T>(
        &self,
        code: &str,
        respond: impl FnOnce(&UrlMapping) -> Result<T>,
    ) -> Result<T> {
        let mapping = self.lookup(code)?;
        let response = respond(&mapping)?;

        // 查找与计数之间映射不会被删除；计数失败说明状态异常
        if !self.store.increment_clicks(code) {
            return Err(ShortenerError::not_found("Short URL not found"));
        }

        debug!("LinkService: redirect '{}' -> '{}'", code, mapping.original_url);
        Ok(response)
    }

    /// Read-only lookup used by the stats endpoint.
    pub fn stats(&self, code: &str) -> Result<UrlMapping> {
        self.lookup(code)
    }

    fn lookup(&self, code: &str) -> Result<UrlMapping> {
        if !is_valid_short_code(code) {
            return Err(ShortenerError::invalid_short_code(
                "Short code must be 6 alphanumeric characters",
            ));
        }

        self.store
            .get(code)
            .ok_or_else(|| ShortenerError::not_found("Short URL not found"))
    }
}
