// ============================================================================
// TsTable - 翻译表检查器
// ============================================================================
//
// 文件: src/core/checker.rs
// 职责: 翻译表一致性检查核心逻辑
// 边界:
//   - ✅ 状态与译文一致性检查
//   - ✅ 重复消息检测
//   - ✅ 占位符一致性检测
//   - ✅ 复数形式数量检测
//   - ❌ 不应包含CLI参数处理
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含国际化文本
//
// ============================================================================

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::core::translator::PluralRule;
use crate::models::{
    Catalog, TranslationEntry, TranslationStatus, TranslationText, VARIANT_SEPARATOR,
};

/// 问题严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// 问题类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// 已完成但译文为空
    EmptyFinished,
    /// 已消失的条目仍带有位置
    VanishedWithLocation { locations: usize },
    /// 同一上下文内 (source, comment) 重复
    DuplicateMessage,
    /// 上下文名称为空
    EmptyContextName,
    /// 源文本与译文的占位符不一致
    PlaceholderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// 复数形式数量与语言规则不符
    NumerusFormCount { expected: usize, found: usize },
    /// 未完成但已有译文，等待审核
    UnfinishedWithTranslation,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::EmptyFinished
            | IssueKind::VanishedWithLocation { .. }
            | IssueKind::DuplicateMessage => Severity::Error,
            IssueKind::EmptyContextName
            | IssueKind::PlaceholderMismatch { .. }
            | IssueKind::NumerusFormCount { .. }
            | IssueKind::UnfinishedWithTranslation => Severity::Warning,
        }
    }

    /// 用于 i18n 查找的键
    pub fn key(&self) -> &'static str {
        match self {
            IssueKind::EmptyFinished => "issue.empty_finished",
            IssueKind::VanishedWithLocation { .. } => "issue.vanished_with_location",
            IssueKind::DuplicateMessage => "issue.duplicate_message",
            IssueKind::EmptyContextName => "issue.empty_context_name",
            IssueKind::PlaceholderMismatch { .. } => "issue.placeholder_mismatch",
            IssueKind::NumerusFormCount { .. } => "issue.numerus_form_count",
            IssueKind::UnfinishedWithTranslation => "issue.unfinished_with_translation",
        }
    }
}

/// 检查发现的问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub context: String,
    pub source: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

/// 检查选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// 是否检查占位符
    pub placeholders: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { placeholders: true }
    }
}

/// 翻译表检查器
pub struct Checker {
    options: CheckOptions,
}

impl Checker {
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    /// 检查整份翻译表
    pub fn check(&self, catalog: &Catalog) -> Vec<Issue> {
        let plural = catalog
            .language
            .as_deref()
            .map(PluralRule::for_language)
            .unwrap_or(PluralRule::English);
        let mut issues = Vec::new();

        for context in &catalog.contexts {
            let mut report = |entry: Option<&TranslationEntry>, kind: IssueKind| {
                issues.push(Issue {
                    severity: kind.severity(),
                    context: context.name.clone(),
                    source: entry.map(|e| e.source.clone()).unwrap_or_default(),
                    kind,
                });
            };

            if context.name.trim().is_empty() {
                report(None, IssueKind::EmptyContextName);
            }

            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            for entry in &context.messages {
                if !seen.insert((entry.source.as_str(), entry.comment.as_str())) {
                    report(Some(entry), IssueKind::DuplicateMessage);
                }
                for kind in self.check_entry(entry, plural) {
                    report(Some(entry), kind);
                }
            }
        }

        tracing::debug!(issues = issues.len(), "catalog check finished");
        issues
    }

    fn check_entry(&self, entry: &TranslationEntry, plural: PluralRule) -> Vec<IssueKind> {
        let mut found = Vec::new();
        let empty = entry.translation.is_empty();

        match entry.status {
            TranslationStatus::Finished if empty => found.push(IssueKind::EmptyFinished),
            TranslationStatus::Vanished if !entry.locations.is_empty() => {
                found.push(IssueKind::VanishedWithLocation {
                    locations: entry.locations.len(),
                })
            }
            TranslationStatus::Unfinished if !empty => {
                found.push(IssueKind::UnfinishedWithTranslation)
            }
            _ => {}
        }

        if entry.numerus && !empty {
            if let TranslationText::Numerus(forms) = &entry.translation {
                if forms.len() != plural.form_count() {
                    found.push(IssueKind::NumerusFormCount {
                        expected: plural.form_count(),
                        found: forms.len(),
                    });
                }
            }
        }

        if self.options.placeholders && !empty && !entry.is_vanished() {
            let source = placeholders(&entry.source);
            let forms: Vec<&str> = match &entry.translation {
                TranslationText::Single(text) => vec![text.as_str()],
                TranslationText::Numerus(forms) => forms.iter().map(String::as_str).collect(),
            };
            let forms: Vec<&str> = forms
                .into_iter()
                .flat_map(|form| form.split(VARIANT_SEPARATOR))
                .collect();
            for form in forms.into_iter().filter(|f| !f.is_empty()) {
                let translation = placeholders(form);
                if translation != source {
                    found.push(IssueKind::PlaceholderMismatch {
                        expected: source.clone(),
                        found: translation,
                    });
                    break;
                }
            }
        }

        found
    }
}

/// 提取排序后的占位符列表：%1..%99、%L1、%n、%Ln 以及进度条的 %p %v %m
pub fn placeholders(text: &str) -> Vec<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"%L?(?:[1-9][0-9]?|n)|%[pvm]").expect("placeholder pattern is valid")
    });
    let mut found: Vec<String> = pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    found.sort();
    found
}

/// 是否存在错误级别问题
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
