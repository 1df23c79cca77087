use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 短码与原始 URL 的绑定关系
///
/// `code` 与 `created_at` 创建后不再变化，`clicks` 只增不减。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_code: String,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Create a fresh mapping with zero clicks, stamped with the current time.
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    /// Creation time as naive ISO-8601 (UTC, no offset).
    ///
    /// 微秒为 0 时省略小数部分，否则固定 6 位
    pub fn created_at_iso(&self) -> String {
        let fmt = if self.created_at.timestamp_subsec_micros() == 0 {
            "%Y-%m-%dT%H:%M:%S"
        } else {
            "%Y-%m-%dT%H:%M:%S%.6f"
        };
        self.created_at.naive_utc().format(fmt).to_string()
    }
}
