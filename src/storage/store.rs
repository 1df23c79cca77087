//! In-memory mapping store
//!
//! 进程内唯一的短码注册表：
//! - 基于 DashMap 分片加锁，同一个 key 的读写在同一把分片锁下完成
//! - 短码一经分配不会被改写或删除
//! - 点击计数的 "查找 + 加一" 在持有分片写锁时完成，不会丢失更新

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{trace, warn};

use super::models::UrlMapping;

/// Concurrency-safe registry of short code -> [`UrlMapping`].
///
/// Construct one per process and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MappingStore {
    mappings: DashMap<String, UrlMapping>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `mapping` under `code` only if the code is still free.
    ///
    /// Returns `false` when another mapping already owns the code; the
    /// existing entry is left untouched.
    pub fn insert_if_absent(&self, code: &str, mapping: UrlMapping) -> bool {
        match self.mappings.entry(code.to_string()) {
            Entry::Occupied(_) => {
                trace!("MappingStore: code already taken: {}", code);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(mapping);
                trace!("MappingStore: inserted code: {}", code);
                true
            }
        }
    }

    /// Store a mapping for a code the caller has checked to be free.
    ///
    /// Codes are never reassigned, so a call for an occupied code keeps the
    /// original binding.
    pub fn put(&self, code: &str, mapping: UrlMapping) {
        if !self.insert_if_absent(code, mapping) {
            warn!(
                "MappingStore: put() on existing code '{}' ignored, codes are never reassigned",
                code
            );
        }
    }

    /// Snapshot of the mapping for `code`, if any.
    pub fn get(&self, code: &str) -> Option<UrlMapping> {
        self.mappings.get(code).map(|entry| entry.value().clone())
    }

    pub fn exists(&self, code: &str) -> bool {
        self.mappings.contains_key(code)
    }

    /// Add exactly one click to `code`. Returns whether the code was found.
    pub fn increment_clicks(&self, code: &str) -> bool {
        match self.mappings.get_mut(code) {
            Some(mut entry) => {
                entry.clicks = entry.clicks.saturating_add(1);
                trace!("MappingStore: clicks for {} -> {}", code, entry.clicks);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
