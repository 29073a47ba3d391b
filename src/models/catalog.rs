// ============================================================================
// TsTable - 翻译表数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: 整份翻译表（TS 文档）的数据结构定义
// 边界:
//   - ✅ 翻译表、上下文数据结构定义
//   - ✅ 条目遍历与按键查找
//   - ✅ 清理已消失条目
//   - ❌ 不应包含 XML 读写逻辑
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含校验规则
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entry::TranslationEntry;

/// 默认 TS 格式版本
pub const DEFAULT_TS_VERSION: &str = "2.1";

/// 翻译上下文（消息分组命名空间）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// 上下文名称，例如 "Theme"
    pub name: String,
    /// 上下文内的消息，保持原始顺序
    pub messages: Vec<TranslationEntry>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// 按源文本与消歧注释查找
    pub fn find(&self, source: &str, comment: &str) -> Option<&TranslationEntry> {
        self.messages
            .iter()
            .find(|m| m.source == source && m.comment == comment)
    }
}

/// 翻译表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// TS 格式版本
    pub version: String,
    /// 目标语言，例如 "en_US"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 源语言
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// 上下文列表，保持原始顺序
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::default()
        }
    }

    /// 获取上下文
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// 获取或创建上下文
    pub fn context_mut(&mut self, name: &str) -> &mut Context {
        let index = match self.contexts.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.contexts.push(Context::new(name));
                self.contexts.len() - 1
            }
        };
        &mut self.contexts[index]
    }

    /// 向指定上下文追加条目
    pub fn push(&mut self, context: &str, entry: TranslationEntry) {
        self.context_mut(context).messages.push(entry);
    }

    /// 遍历所有 (上下文名, 条目)
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TranslationEntry)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 以 (上下文, 源文本) 为键的映射
    ///
    /// 同键时优先取没有消歧注释的条目，其次取第一条，与 `Translator::get` 一致。
    pub fn entries_by_key(&self) -> HashMap<(&str, &str), &TranslationEntry> {
        let mut map: HashMap<(&str, &str), &TranslationEntry> = HashMap::new();
        for (context, entry) in self.entries() {
            map.entry((context, entry.source.as_str()))
                .and_modify(|kept| {
                    if !kept.comment.is_empty() && entry.comment.is_empty() {
                        *kept = entry;
                    }
                })
                .or_insert(entry);
        }
        map
    }

    /// 删除已消失的条目，返回删除数量；删除后为空的上下文一并移除
    pub fn prune_vanished(&mut self) -> usize {
        let before = self.len();
        for context in &mut self.contexts {
            context.messages.retain(|m| !m.is_vanished());
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        before - self.len()
    }
}
