// ============================================================================
// TsTable - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 库层统一错误类型定义
// 边界:
//   - ✅ 翻译表读写相关错误枚举
//   - ✅ 错误构造辅助函数
//   - ❌ 不应包含国际化文本
//   - ❌ 不应包含 CLI 退出码处理
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 翻译表操作错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 文件读写失败
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML 语法错误
    #[error("malformed XML at byte {position}: {reason}")]
    Xml { position: usize, reason: String },

    /// 根元素不是 <TS>
    #[error("expected root element <TS>, found <{0}>")]
    UnexpectedRoot(String),

    /// 元素出现在不允许的位置
    #[error("unexpected <{element}> inside <{parent}>")]
    UnexpectedElement { element: String, parent: String },

    /// <location> 的 line 属性无法解析
    #[error("invalid location line '{line}' in {filename}")]
    InvalidLocation { filename: String, line: String },

    /// 导出失败
    #[error("failed to serialize catalog: {0}")]
    Serialize(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn xml(position: usize, reason: impl ToString) -> Self {
        Self::Xml {
            position,
            reason: reason.to_string(),
        }
    }

    pub fn unexpected_element(element: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            element: element.into(),
            parent: parent.into(),
        }
    }
}

/// 库层 Result 别名
pub type Result<T> = std::result::Result<T, CatalogError>;
