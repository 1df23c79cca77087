use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

fn slot() -> &'static ArcSwap<StaticConfig> {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
}

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to defaults when nothing has
/// been loaded yet.
pub fn get_config() -> Arc<StaticConfig> {
    slot().load_full()
}

/// Replace the global configuration.
pub fn set_config(config: StaticConfig) -> Arc<StaticConfig> {
    let config = Arc::new(config);
    slot().store(config.clone());
    config
}
