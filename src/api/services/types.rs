//! API 响应类型定义

use serde::{Deserialize, Serialize};

use crate::storage::UrlMapping;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatsResponse {
    pub url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: String,
}

impl From<&UrlMapping> for StatsResponse {
    fn from(mapping: &UrlMapping) -> Self {
        Self {
            url: mapping.original_url.clone(),
            short_code: mapping.short_code.clone(),
            clicks: mapping.clicks,
            created_at: mapping.created_at_iso(),
        }
    }
}
