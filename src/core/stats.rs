// ============================================================================
// TsTable - 翻译进度统计
// ============================================================================
//
// 文件: src/core/stats.rs
// 职责: 按上下文和整份翻译表统计翻译状态
// 边界:
//   - ✅ 状态计数与完成率计算
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use serde::Serialize;

use crate::models::{Catalog, Context, TranslationStatus};

/// 状态计数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}

impl StatusCounts {
    fn add(&mut self, status: TranslationStatus) {
        self.total += 1;
        match status {
            TranslationStatus::Finished => self.finished += 1,
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Vanished => self.vanished += 1,
        }
    }

    fn merge(&mut self, other: &StatusCounts) {
        self.total += other.total;
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.vanished += other.vanished;
    }

    /// 完成率（百分比），只统计未消失的条目；没有条目时为 100
    pub fn completion(&self) -> f64 {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / active as f64
        }
    }
}

/// 单个上下文的统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextStats {
    pub name: String,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub completion: f64,
}

/// 翻译表统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub contexts: Vec<ContextStats>,
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub completion: f64,
}

/// 统计单个上下文
pub fn context_stats(context: &Context) -> ContextStats {
    let mut counts = StatusCounts::default();
    for message in &context.messages {
        counts.add(message.status);
    }
    ContextStats {
        name: context.name.clone(),
        completion: counts.completion(),
        counts,
    }
}

/// 统计整份翻译表
pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let contexts: Vec<ContextStats> = catalog.contexts.iter().map(context_stats).collect();
    let mut counts = StatusCounts::default();
    for context in &contexts {
        counts.merge(&context.counts);
    }
    CatalogStats {
        language: catalog.language.clone(),
        contexts,
        completion: counts.completion(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranslationEntry;

    #[test]
    fn completion_ignores_vanished() {
        let mut catalog = Catalog::new("en_US");
        catalog.push("Theme", TranslationEntry::finished("时间", "Time"));
        catalog.push("Theme", TranslationEntry::finished("天气", "Weather"));
        catalog.push("Theme", TranslationEntry::finished("取消", "Cancel"));
        catalog.push("Theme", TranslationEntry::unfinished("-- 天"));
        catalog.push("Theme", TranslationEntry::vanished("32 日 周二", "Day 32 Tuesday"));
        catalog.push("Menu", TranslationEntry::vanished("旧", "Old"));

        let stats = catalog_stats(&catalog);
        assert_eq!(stats.counts.total, 6);
        assert_eq!(stats.counts.finished, 3);
        assert_eq!(stats.counts.unfinished, 1);
        assert_eq!(stats.counts.vanished, 2);
        assert!((stats.completion - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.contexts[1].completion, 100.0);
    }

    #[test]
    fn empty_catalog_is_complete() {
        let stats = catalog_stats(&Catalog::default());
        assert_eq!(stats.completion, 100.0);
        assert!(stats.contexts.is_empty());
    }
}
