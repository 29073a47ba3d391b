// ============================================================================
// TsTable - 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
//
// ============================================================================

pub mod catalog;
pub mod config;
pub mod entry;

pub use catalog::{Catalog, Context};
pub use entry::{
    Location, TranslationEntry, TranslationStatus, TranslationText, VARIANT_SEPARATOR,
};
