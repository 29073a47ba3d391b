// ============================================================================
// TsTable - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和主题管理
// 边界:
//   - ✅ 日志级别颜色主题
//   - ✅ 状态颜色映射
//   - ✅ 颜色开关（非终端或 --no-color 时关闭）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::{ColoredString, Colorize};

use crate::models::TranslationStatus;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 根据配置和终端状态启用或关闭颜色
    pub fn configure(colored: bool) {
        let enabled = colored && atty::is(atty::Stream::Stdout);
        colored::control::set_override(enabled);
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> ColoredString {
        text.cyan()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> ColoredString {
        text.yellow()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// 次要信息 (灰色)
    pub fn dim(text: &str) -> ColoredString {
        text.bright_black()
    }

    /// 粗体
    pub fn bold(text: &str) -> ColoredString {
        text.bold()
    }

    /// 按翻译状态着色
    pub fn status(status: TranslationStatus) -> ColoredString {
        match status {
            TranslationStatus::Finished => Self::success(status.as_str()),
            TranslationStatus::Unfinished => Self::warn(status.as_str()),
            TranslationStatus::Vanished => Self::dim(status.as_str()),
        }
    }
}
