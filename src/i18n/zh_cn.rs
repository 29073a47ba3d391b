// ============================================================================
// TsTable - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 错误信息
    ("error.path_not_exist", "路径不存在: {}"),
    (
        "error.no_tables_found",
        "未找到翻译表 (.ts)，请指定文件或目录，或设置 workspace.root",
    ),
    ("error.load_failed", "加载翻译表失败: {}"),
    ("error.write_failed", "写入文件失败: {}"),
    ("error.config_invalid", "配置文件无效: {}"),
    // 查找命令
    ("lookup.not_found", "没有找到条目 \"{}\" / \"{}\""),
    ("lookup.context", "上下文: {}"),
    ("lookup.source", "源文本: {}"),
    ("lookup.comment", "注释:   {}"),
    ("lookup.status", "状态:   {}"),
    ("lookup.translation", "译文:   {}"),
    ("lookup.numerus_form", "形式 {}: {}"),
    // 检查命令
    ("check.start", "正在检查 {} 个翻译表..."),
    ("check.file_clean", "{} 没有问题"),
    ("check.issue_counts", "{} 个错误，{} 个警告"),
    ("check.context_header", "{} {}"),
    ("check.failed", "翻译表存在问题"),
    ("check.all_good", "所有翻译表均一致"),
    // 问题描述
    ("issue.empty_finished", "标记为已完成但译文为空"),
    ("issue.vanished_with_location", "已消失的条目仍有 {} 个位置"),
    ("issue.duplicate_message", "上下文内存在重复消息"),
    ("issue.empty_context_name", "上下文没有名称"),
    (
        "issue.placeholder_mismatch",
        "占位符不一致: 源文本 [{}]，译文 [{}]",
    ),
    ("issue.numerus_form_count", "应有 {} 个复数形式，实际 {} 个"),
    ("issue.unfinished_with_translation", "已有译文但仍标记为未完成"),
    // 统计命令
    ("stats.total", "合计 {} {}%"),
    ("stats.counts", "{} 条消息: 已完成 {}，未完成 {}，已消失 {}"),
    // 导出命令
    ("export.written", "已导出 {} 条消息到 {}"),
    // 格式化命令
    ("fmt.pruned", "已删除 {} 条已消失的消息"),
    ("fmt.already_formatted", "{} 已是规范格式"),
    ("fmt.needs_format", "{} 不是规范格式"),
    ("fmt.written", "已写入 {} 条消息到 {}"),
    // 初始化命令
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 参数强制覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.settings", "workspace.root = {}, i18n.language = {}"),
    (
        "init.next_steps",
        "请编辑配置文件设置 workspace.root 与 lookup.default_context",
    ),
    ("init.create_failed", "创建配置文件失败: {}"),
];
