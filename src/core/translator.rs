// ============================================================================
// TsTable - 翻译查找
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 按 (上下文, 源文本) 查找译文，缺失或未完成时回退为源文本
// 边界:
//   - ✅ 查找表构建
//   - ✅ 回退策略
//   - ✅ 复数形式选择与 %n 替换
//   - ❌ 不应包含 XML 解析逻辑
//   - ❌ 不应读取全局配置
//
// ============================================================================

use std::collections::HashMap;
use std::path::Path;

use crate::core::parser;
use crate::error::Result;
use crate::models::{Catalog, TranslationEntry, TranslationStatus};

/// 查找选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// 使用未完成但非空的译文
    pub include_unfinished: bool,
}

/// 复数规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// 只有一种形式（中文、日文等）
    One,
    /// n == 1 为单数（英语等）
    English,
    /// n <= 1 为单数（法语、巴西葡萄牙语）
    French,
    /// 俄语、乌克兰语等三种形式
    EastSlavic,
    /// 波兰语三种形式
    Polish,
    /// 捷克语、斯洛伐克语三种形式
    Czech,
}

impl PluralRule {
    /// 根据语言代码（如 "en_US"、"zh-CN"、"pt_BR"）选择规则，未知语言按英语处理
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_lowercase();
        let primary = normalized.split('_').next().unwrap_or("");
        match primary {
            "zh" | "ja" | "ko" | "vi" | "th" | "id" | "ms" | "tr" => PluralRule::One,
            "fr" => PluralRule::French,
            "pt" if normalized == "pt_br" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::Czech,
            _ => PluralRule::English,
        }
    }

    /// 该规则需要的形式数量
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::One => 1,
            PluralRule::English | PluralRule::French => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Czech => 3,
        }
    }

    /// 数量 n 对应的形式下标
    pub fn index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let (n10, n100) = (n % 10, n % 100);
        match self {
            PluralRule::One => 0,
            PluralRule::English => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

/// 运行时翻译器
///
/// 构建完成后只读，可通过 `Arc` 在线程间共享。
#[derive(Debug, Clone)]
pub struct Translator {
    language: Option<String>,
    plural: PluralRule,
    options: LookupOptions,
    /// 上下文 -> 源文本 -> 同源文本的条目（消歧注释不同）
    contexts: HashMap<String, HashMap<String, Vec<TranslationEntry>>>,
}

impl Translator {
    /// 从翻译表构建
    pub fn from_catalog(catalog: &Catalog, options: LookupOptions) -> Self {
        let mut contexts: HashMap<String, HashMap<String, Vec<TranslationEntry>>> = HashMap::new();
        for (context, entry) in catalog.entries() {
            let by_source = contexts.entry(context.to_string()).or_default();
            let same_source = by_source.entry(entry.source.clone()).or_default();
            // 同一 (source, comment) 只保留第一条
            if !same_source.iter().any(|e| e.comment == entry.comment) {
                same_source.push(entry.clone());
            }
        }

        let language = catalog.language.clone();
        let plural = language
            .as_deref()
            .map(PluralRule::for_language)
            .unwrap_or(PluralRule::English);

        Self {
            language,
            plural,
            options,
            contexts,
        }
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>, options: LookupOptions) -> Result<Self> {
        let catalog = parser::load(path)?;
        Ok(Self::from_catalog(&catalog, options))
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.plural
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.contexts
            .values()
            .flat_map(|m| m.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 取 (上下文, 源文本) 对应的条目；优先取无消歧注释的条目
    pub fn get(&self, context: &str, source: &str) -> Option<&TranslationEntry> {
        let entries = self.contexts.get(context)?.get(source)?;
        entries
            .iter()
            .find(|e| e.comment.is_empty())
            .or_else(|| entries.first())
    }

    /// 按消歧注释精确取条目
    pub fn get_with_comment(
        &self,
        context: &str,
        source: &str,
        comment: &str,
    ) -> Option<&TranslationEntry> {
        self.contexts
            .get(context)?
            .get(source)?
            .iter()
            .find(|e| e.comment == comment)
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.get(context, source).is_some()
    }

    /// 查找译文，缺失、未完成、已消失或为空时回退为源文本
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.get(context, source)
            .and_then(|entry| self.usable(entry))
            .map(|entry| entry.translation.first())
            .unwrap_or(source)
    }

    /// 带消歧注释查找
    pub fn lookup_with_comment<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        self.get_with_comment(context, source, comment)
            .and_then(|entry| self.usable(entry))
            .map(|entry| entry.translation.first())
            .unwrap_or(source)
    }

    /// 复数查找：按语言规则选择形式并把 %n 替换为 n
    pub fn lookup_plural(&self, context: &str, source: &str, n: i64) -> String {
        self.plural_text(self.get(context, source), source, n)
    }

    /// 带消歧注释的复数查找
    pub fn lookup_plural_with_comment(
        &self,
        context: &str,
        source: &str,
        comment: &str,
        n: i64,
    ) -> String {
        self.plural_text(self.get_with_comment(context, source, comment), source, n)
    }

    fn plural_text(&self, entry: Option<&TranslationEntry>, source: &str, n: i64) -> String {
        let template = entry
            .and_then(|entry| self.usable(entry))
            .map(|entry| entry.translation.form(self.plural.index(n)))
            .filter(|form| !form.is_empty())
            .unwrap_or(source);
        template.replace("%n", &n.to_string())
    }

    fn usable<'a>(&self, entry: &'a TranslationEntry) -> Option<&'a TranslationEntry> {
        let allowed = match entry.status {
            TranslationStatus::Finished => true,
            TranslationStatus::Unfinished => self.options.include_unfinished,
            TranslationStatus::Vanished => false,
        };
        (allowed && !entry.translation.is_empty()).then_some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranslationText;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new("en_US");
        catalog.push("Theme", TranslationEntry::finished("取消", "Cancel"));
        catalog.push("Theme", TranslationEntry::unfinished("加载中..."));
        let mut draft = TranslationEntry::unfinished("当前城市");
        draft.translation = TranslationText::Single("City".into());
        catalog.push("Theme", draft);
        catalog.push("Theme", TranslationEntry::vanished("32 日 周二", "Day 32 Tuesday"));
        catalog.push("Theme", TranslationEntry::finished("测试", "Debug"));
        catalog.push(
            "Theme",
            TranslationEntry::finished("测试", "Test run").with_comment("toolbar"),
        );
        catalog.push("Theme", TranslationEntry::finished("空", ""));

        let mut days = TranslationEntry::finished("%n 天", "");
        days.numerus = true;
        days.translation = TranslationText::Numerus(vec!["%n Day".into(), "%n Days".into()]);
        catalog.push("Theme", days);
        catalog
    }

    #[test]
    fn finished_entries_translate() {
        let t = Translator::from_catalog(&catalog(), LookupOptions::default());
        assert_eq!(t.lookup("Theme", "取消"), "Cancel");
    }

    #[test]
    fn unfinished_and_missing_fall_back_to_source() {
        let t = Translator::from_catalog(&catalog(), LookupOptions::default());
        assert_eq!(t.lookup("Theme", "加载中..."), "加载中...");
        assert_eq!(t.lookup("Theme", "当前城市"), "当前城市");
        assert_eq!(t.lookup("Theme", "不存在"), "不存在");
        assert_eq!(t.lookup("Nope", "取消"), "取消");
        assert_eq!(t.lookup("Theme", "空"), "空");
    }

    #[test]
    fn vanished_entries_are_never_used() {
        let options = LookupOptions {
            include_unfinished: true,
        };
        let t = Translator::from_catalog(&catalog(), options);
        assert_eq!(t.lookup("Theme", "32 日 周二"), "32 日 周二");
        assert!(t.get("Theme", "32 日 周二").is_some());
    }

    #[test]
    fn include_unfinished_uses_draft_text() {
        let options = LookupOptions {
            include_unfinished: true,
        };
        let t = Translator::from_catalog(&catalog(), options);
        assert_eq!(t.lookup("Theme", "当前城市"), "City");
        assert_eq!(t.lookup("Theme", "加载中..."), "加载中...");
    }

    #[test]
    fn disambiguation_comment_selects_entry() {
        let t = Translator::from_catalog(&catalog(), LookupOptions::default());
        assert_eq!(t.lookup("Theme", "测试"), "Debug");
        assert_eq!(t.lookup_with_comment("Theme", "测试", "toolbar"), "Test run");
        assert_eq!(t.lookup_with_comment("Theme", "测试", "other"), "测试");
    }

    #[test]
    fn plural_lookup_picks_form_and_substitutes_count() {
        let t = Translator::from_catalog(&catalog(), LookupOptions::default());
        assert_eq!(t.lookup_plural("Theme", "%n 天", 1), "1 Day");
        assert_eq!(t.lookup_plural("Theme", "%n 天", 300), "300 Days");
        assert_eq!(t.lookup_plural("Theme", "%n 小时", 3), "3 小时");
    }

    #[test]
    fn plural_lookup_honours_disambiguation_comment() {
        let mut c = catalog();
        let mut left = TranslationEntry::finished("%n 天", "").with_comment("countdown");
        left.numerus = true;
        left.translation =
            TranslationText::Numerus(vec!["%n day left".into(), "%n days left".into()]);
        c.push("Theme", left);

        let t = Translator::from_catalog(&c, LookupOptions::default());
        assert_eq!(t.lookup_plural("Theme", "%n 天", 2), "2 Days");
        assert_eq!(
            t.lookup_plural_with_comment("Theme", "%n 天", "countdown", 1),
            "1 day left"
        );
        assert_eq!(
            t.lookup_plural_with_comment("Theme", "%n 天", "missing", 4),
            "4 天"
        );
    }

    #[test]
    fn length_variant_lookup_uses_first_variant() {
        let mut c = Catalog::new("en_US");
        c.push("Theme", TranslationEntry::finished("天气", "Weather\u{9c}Wthr"));
        let t = Translator::from_catalog(&c, LookupOptions::default());
        assert_eq!(t.lookup("Theme", "天气"), "Weather");
    }

    #[test]
    fn plural_rules_by_language() {
        assert_eq!(PluralRule::for_language("zh_CN"), PluralRule::One);
        assert_eq!(PluralRule::for_language("pt-BR"), PluralRule::French);
        assert_eq!(PluralRule::for_language("pt_PT"), PluralRule::English);
        assert_eq!(PluralRule::for_language("xx"), PluralRule::English);

        let ru = PluralRule::EastSlavic;
        assert_eq!((ru.index(1), ru.index(3), ru.index(5), ru.index(11), ru.index(21)), (0, 1, 2, 2, 0));
        let pl = PluralRule::Polish;
        assert_eq!((pl.index(1), pl.index(22), pl.index(21)), (0, 1, 2));
        assert_eq!(PluralRule::French.index(0), 0);
        assert_eq!(PluralRule::English.index(0), 1);
        assert_eq!(PluralRule::Czech.index(4), 1);
    }

    #[test]
    fn get_agrees_with_catalog_key_map() {
        let mut c = Catalog::new("en_US");
        c.push("Theme", TranslationEntry::finished("s", "A").with_comment("menu"));
        c.push("Theme", TranslationEntry::finished("s", "B"));
        c.push("Theme", TranslationEntry::finished("t", "C").with_comment("x"));

        let t = Translator::from_catalog(&c, LookupOptions::default());
        for ((context, source), entry) in c.entries_by_key() {
            assert_eq!(t.get(context, source), Some(entry));
        }
        assert_eq!(t.lookup("Theme", "s"), "B");
    }

    #[test]
    fn duplicate_keys_keep_first_entry() {
        let mut c = catalog();
        c.push("Theme", TranslationEntry::finished("取消", "Abort"));
        let t = Translator::from_catalog(&c, LookupOptions::default());
        assert_eq!(t.lookup("Theme", "取消"), "Cancel");
    }
}
