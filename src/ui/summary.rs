// ============================================================================
// TsTable - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 检查结果、统计信息与条目详情的表格显示
// 边界:
//   - ✅ 检查问题表格显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含检查或统计逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::collections::BTreeMap;
use std::path::Path;

use crate::core::checker::{Issue, IssueKind, Severity};
use crate::core::stats::{CatalogStats, StatusCounts};
use crate::models::TranslationEntry;
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, progress_chars, RULE_HEAVY, RULE_LIGHT};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 进度条宽度
const BAR_WIDTH: usize = 20;

// ============================================================================
// 检查结果显示
// ============================================================================

/// 打印单个文件的问题表格
pub fn print_issues_table(file: &Path, issues: &[Issue], detail: bool) {
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues.len() - errors;

    Logger::info("");
    Logger::info(format!("{} {}", icons::FILE, Colors::bold(&file.display().to_string())));
    Logger::info(tf!("check.issue_counts", errors, warnings));
    Logger::info(RULE_LIGHT);

    if detail {
        // 详细模式：按上下文分组
        let mut by_context: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in issues {
            by_context.entry(issue.context.as_str()).or_default().push(issue);
        }
        for (context, issues) in by_context {
            Logger::info(tf!("check.context_header", icons::CONTEXT, context));
            for issue in issues {
                print_issue(issue, "    ");
            }
        }
    } else {
        for issue in issues {
            print_issue(issue, "  ");
        }
    }
}

fn print_issue(issue: &Issue, indent: &str) {
    let marker = match issue.severity {
        Severity::Error => Colors::error(icons::ERROR),
        Severity::Warning => Colors::warn(icons::WARNING),
    };
    let source = if issue.source.is_empty() {
        String::new()
    } else {
        format!("\"{}\" ", issue.source)
    };
    Logger::info(format!("{}{} {}{}", indent, marker, source, describe_issue(&issue.kind)));
}

/// 问题的本地化描述
pub fn describe_issue(kind: &IssueKind) -> String {
    match kind {
        IssueKind::VanishedWithLocation { locations } => tf!(kind.key(), locations),
        IssueKind::PlaceholderMismatch { expected, found } => {
            tf!(kind.key(), expected.join(" "), found.join(" "))
        }
        IssueKind::NumerusFormCount { expected, found } => tf!(kind.key(), expected, found),
        IssueKind::EmptyFinished
        | IssueKind::DuplicateMessage
        | IssueKind::EmptyContextName
        | IssueKind::UnfinishedWithTranslation => t!(kind.key()),
    }
}

// ============================================================================
// 统计信息显示
// ============================================================================

/// 打印单个文件的统计表格
pub fn print_stats_table(file: &Path, stats: &CatalogStats) {
    Logger::info("");
    Logger::info(format!(
        "{} {} ({})",
        icons::STATS,
        Colors::bold(&file.display().to_string()),
        stats.language.as_deref().unwrap_or("-")
    ));
    Logger::info(RULE_HEAVY);

    for context in &stats.contexts {
        Logger::info(format!(
            "{} {:<16} {} {:>5.1}%",
            icons::CONTEXT,
            context.name,
            progress_bar(context.completion),
            context.completion
        ));
        print_counts(&context.counts, "    ");
    }

    Logger::info(RULE_LIGHT);
    Logger::info(tf!(
        "stats.total",
        progress_bar(stats.completion),
        format!("{:.1}", stats.completion)
    ));
    print_counts(&stats.counts, "  ");
}

fn print_counts(counts: &StatusCounts, indent: &str) {
    Logger::info(format!(
        "{}{}",
        indent,
        tf!(
            "stats.counts",
            counts.total,
            Colors::success(&counts.finished.to_string()),
            Colors::warn(&counts.unfinished.to_string()),
            Colors::dim(&counts.vanished.to_string())
        )
    ));
}

/// 文本进度条
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "{}{}",
        progress_chars::FILLED.repeat(filled),
        progress_chars::EMPTY.repeat(BAR_WIDTH - filled)
    )
}

// ============================================================================
// 条目详情显示
// ============================================================================

/// 打印单个条目详情
pub fn print_entry(context: &str, entry: &TranslationEntry) {
    Logger::info(RULE_LIGHT);
    Logger::info(tf!("lookup.context", context));
    Logger::info(tf!("lookup.source", entry.source));
    if !entry.comment.is_empty() {
        Logger::info(tf!("lookup.comment", entry.comment));
    }
    Logger::info(tf!("lookup.status", Colors::status(entry.status)));

    match &entry.translation {
        crate::models::TranslationText::Numerus(forms) => {
            for index in 0..forms.len() {
                Logger::info(tf!("lookup.numerus_form", index, entry.translation.form(index)));
            }
        }
        text => Logger::info(tf!("lookup.translation", text.first())),
    }

    for location in &entry.locations {
        Logger::info(format!("  {} {}", icons::LOCATION, location));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_fixed_width() {
        assert_eq!(progress_bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(progress_bar(100.0), progress_chars::FILLED.repeat(BAR_WIDTH));
        assert_eq!(progress_bar(250.0).chars().count(), BAR_WIDTH);
    }
}
