// ============================================================================
// TsTable - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与常用类型导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型重新导出
//   - ✅ 顶层 load 入口
//   - ❌ 不应包含具体业务实现
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::Path;

pub use crate::core::{
    catalog_stats, CatalogScanner, CheckOptions, Checker, Issue, IssueKind, LookupOptions,
    PluralRule, Severity, Translator,
};
pub use crate::core::parser::parse_str;
pub use crate::core::writer::{save, to_string};
pub use error::{CatalogError, Result};
pub use models::{Catalog, Context, Location, TranslationEntry, TranslationStatus, TranslationText};

/// 加载翻译表并构建默认选项的翻译器
pub fn load(path: impl AsRef<Path>) -> Result<Translator> {
    Translator::load(path, LookupOptions::default())
}

/// 只解析翻译表，不构建查找表
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    crate::core::parser::load(path)
}
