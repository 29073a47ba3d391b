// ============================================================================
// TsTable - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 像素图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "TSTABLE";

/// 表格分隔线
pub const RULE_HEAVY: &str = "═══════════════════════════════════════";
pub const RULE_LIGHT: &str = "───────────────────────────────────────";

/// 像素风格图标
pub mod icons {
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 文件图标
    pub const FILE: &str = "●";
    /// 上下文图标
    pub const CONTEXT: &str = "▪";
    /// 统计图标
    pub const STATS: &str = "◇";
    /// 位置图标
    pub const LOCATION: &str = "◦";
}

/// 进度条字符
pub mod progress_chars {
    /// 已完成块
    pub const FILLED: &str = "█";
    /// 未完成块
    pub const EMPTY: &str = "░";
}
