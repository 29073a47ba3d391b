// ============================================================================
// TsTable - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 工具自身界面文本的国际化支持
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    // 每次都从配置获取语言设置
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());
    translate(&language, key)
}

/// 按指定语言查找翻译
pub fn translate(language: &str, key: &str) -> String {
    let translation_data = match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS, // 默认使用英文
    };

    translation_data
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 从配置获取语言设置
fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    // 配置未初始化或获取失败时返回 None
    Config::get_language().ok()
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut cursor = 0;
    for arg in args.iter() {
        // 替换下一个 {} 占位符，跳过已替换的内容
        if let Some(pos) = result[cursor..].find("{}") {
            let start = cursor + pos;
            result.replace_range(start..start + 2, arg);
            cursor = start + arg.len();
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_define_the_same_keys() {
        let mut en: Vec<&str> = en_us::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        let mut zh: Vec<&str> = zh_cn::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        en.sort();
        zh.sort();
        assert_eq!(en, zh);
    }

    #[test]
    fn placeholder_counts_match_between_languages() {
        for (key, en) in en_us::TRANSLATIONS {
            let zh = translate("zh_cn", key);
            assert_eq!(en.matches("{}").count(), zh.matches("{}").count(), "{}", key);
        }
    }

    #[test]
    fn arguments_containing_braces_are_not_reformatted() {
        let text = format_with_args("{} -> {}".to_string(), vec!["{}".into(), "x".into()]);
        assert_eq!(text, "{} -> x");
    }

    #[test]
    fn unknown_keys_and_languages() {
        assert_eq!(translate("fr", "check.failed"), "Translation tables have problems");
        assert!(translate("en_us", "nope").starts_with("Unknown translation key"));
    }
}
