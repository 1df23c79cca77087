//! Storage layer
//!
//! 所有短链数据只保存在内存中，进程重启后丢失。

pub mod models;
pub mod store;

pub use models::UrlMapping;
pub use store::MappingStore;
