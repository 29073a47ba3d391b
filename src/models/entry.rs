// ============================================================================
// TsTable - 翻译条目数据模型
// ============================================================================
//
// 文件: src/models/entry.rs
// 职责: 单条翻译消息的数据结构定义
// 边界:
//   - ✅ 翻译条目、状态、位置信息定义
//   - ✅ 数据序列化/反序列化
//   - ✅ 基础查询方法
//   - ❌ 不应包含 XML 解析逻辑
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含校验规则
//
// ============================================================================

use serde::{Deserialize, Serialize};

/// 翻译状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// 已完成
    #[default]
    Finished,
    /// 未完成
    Unfinished,
    /// 源文本已从界面中消失，译文仅作保留
    Vanished,
}

impl TranslationStatus {
    /// 对应 `<translation type="...">` 的属性值，已完成时无属性
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    /// 从 type 属性解析，旧格式的 obsolete 视为 vanished
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "vanished" | "obsolete" => Some(TranslationStatus::Vanished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::Finished => "finished",
            TranslationStatus::Unfinished => "unfinished",
            TranslationStatus::Vanished => "vanished",
        }
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 源文本在界面定义文件中的位置
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// 界面定义文件（相对翻译表的路径）
    pub filename: String,
    /// 行号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: filename.into(),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// 长度变体分隔符：`<lengthvariant>` 按顺序以该字符连接存入同一段文本
pub const VARIANT_SEPARATOR: char = '\u{9c}';

/// 取文本的第一个长度变体（最长的形式）
pub fn first_variant(text: &str) -> &str {
    text.split(VARIANT_SEPARATOR).next().unwrap_or(text)
}

/// 译文内容：普通文本或复数形式列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationText {
    Single(String),
    Numerus(Vec<String>),
}

impl TranslationText {
    /// 是否没有任何可用译文
    pub fn is_empty(&self) -> bool {
        match self {
            TranslationText::Single(text) => text.is_empty(),
            TranslationText::Numerus(forms) => forms.iter().all(|form| form.is_empty()),
        }
    }

    /// 普通文本，或复数消息的第一个形式；含长度变体时取第一个变体
    pub fn first(&self) -> &str {
        first_variant(self.raw(0))
    }

    /// 按下标取复数形式，下标超界时取最后一个；含长度变体时取第一个变体
    pub fn form(&self, index: usize) -> &str {
        first_variant(self.raw(index))
    }

    /// 未拆分长度变体的原始文本
    pub fn raw(&self, index: usize) -> &str {
        match self {
            TranslationText::Single(text) => text,
            TranslationText::Numerus(forms) => forms
                .get(index)
                .or_else(|| forms.last())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

impl Default for TranslationText {
    fn default() -> Self {
        TranslationText::Single(String::new())
    }
}

/// 翻译条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// 源语言文本
    pub source: String,
    /// 译文
    pub translation: TranslationText,
    /// 翻译状态
    pub status: TranslationStatus,
    /// 出现位置
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    /// 消歧注释，与 source 一起构成查找键
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// 开发者给译者的说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    /// 译者备注
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    /// 源文本修改前的内容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_source: Option<String>,
    /// 消歧注释修改前的内容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_comment: Option<String>,
    /// 是否为复数消息
    #[serde(default)]
    pub numerus: bool,
}

impl TranslationEntry {
    /// 创建已完成的普通条目
    pub fn finished(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: TranslationText::Single(translation.into()),
            status: TranslationStatus::Finished,
            locations: Vec::new(),
            comment: String::new(),
            extra_comment: None,
            translator_comment: None,
            old_source: None,
            old_comment: None,
            numerus: false,
        }
    }

    /// 创建未完成的空条目
    pub fn unfinished(source: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            ..Self::finished(source, "")
        }
    }

    /// 创建已消失的条目
    pub fn vanished(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Vanished,
            ..Self::finished(source, translation)
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    pub fn is_vanished(&self) -> bool {
        self.status == TranslationStatus::Vanished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_attr_round_trip() {
        assert_eq!(TranslationStatus::Finished.as_attr(), None);
        assert_eq!(
            TranslationStatus::from_attr("unfinished"),
            Some(TranslationStatus::Unfinished)
        );
        assert_eq!(
            TranslationStatus::from_attr("obsolete"),
            Some(TranslationStatus::Vanished)
        );
        assert_eq!(TranslationStatus::from_attr("bogus"), None);
    }

    #[test]
    fn numerus_form_clamps_to_last() {
        let text = TranslationText::Numerus(vec!["%n day".into(), "%n days".into()]);
        assert_eq!(text.form(0), "%n day");
        assert_eq!(text.form(5), "%n days");
        assert!(!text.is_empty());
        assert!(TranslationText::Numerus(vec![String::new()]).is_empty());
    }

    #[test]
    fn length_variants_resolve_to_the_first() {
        let text = TranslationText::Single("Weather\u{9c}Wthr".into());
        assert_eq!(text.first(), "Weather");
        assert_eq!(text.raw(0), "Weather\u{9c}Wthr");

        let forms = TranslationText::Numerus(vec!["%n day".into(), "%n days\u{9c}%nd".into()]);
        assert_eq!(forms.form(1), "%n days");
    }

    #[test]
    fn location_display() {
        assert_eq!(Location::new("../widget-time.ui", 26).to_string(), "../widget-time.ui:26");
    }
}
