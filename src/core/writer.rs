// ============================================================================
// TsTable - 翻译表序列化
// ============================================================================
//
// 文件: src/core/writer.rs
// 职责: 将 Catalog 序列化为 TS XML 文档
// 边界:
//   - ✅ 与 Qt 工具链一致的缩进和转义
//   - ✅ 状态属性与复数形式输出
//   - ✅ 写入文件
//   - ❌ 不应包含解析逻辑
//   - ❌ 不应修改翻译表内容
//
// ============================================================================

use quick_xml::escape::escape as escape_attr;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::{Catalog, TranslationEntry, TranslationText, VARIANT_SEPARATOR};

const INDENT: &str = "    ";

/// 序列化为 TS XML 字符串
pub fn to_string(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(out, "<TS version=\"{}\"", escape_attr(&catalog.version));
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape_attr(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape_attr(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "{INDENT}<name>{}</name>", escape(&context.name));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// 写入文件
pub fn save(catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_string(catalog)).map_err(|e| CatalogError::io(path, e))?;
    debug!(path = %path.display(), messages = catalog.len(), "saved translation table");
    Ok(())
}

fn write_message(out: &mut String, message: &TranslationEntry) {
    let pad = INDENT.repeat(2);

    if message.numerus {
        let _ = writeln!(out, "{INDENT}<message numerus=\"yes\">");
    } else {
        let _ = writeln!(out, "{INDENT}<message>");
    }

    for location in &message.locations {
        let _ = write!(out, "{pad}<location filename=\"{}\"", escape_attr(&location.filename));
        if let Some(line) = location.line {
            let _ = write!(out, " line=\"{line}\"");
        }
        out.push_str("/>\n");
    }

    let _ = writeln!(out, "{pad}<source>{}</source>", escape(&message.source));
    if let Some(old_source) = &message.old_source {
        let _ = writeln!(out, "{pad}<oldsource>{}</oldsource>", escape(old_source));
    }
    if !message.comment.is_empty() {
        let _ = writeln!(out, "{pad}<comment>{}</comment>", escape(&message.comment));
    }
    if let Some(old_comment) = &message.old_comment {
        let _ = writeln!(out, "{pad}<oldcomment>{}</oldcomment>", escape(old_comment));
    }
    if let Some(extra) = &message.extra_comment {
        let _ = writeln!(out, "{pad}<extracomment>{}</extracomment>", escape(extra));
    }
    if let Some(note) = &message.translator_comment {
        let _ = writeln!(
            out,
            "{pad}<translatorcomment>{}</translatorcomment>",
            escape(note)
        );
    }

    let type_attr = message
        .status
        .as_attr()
        .map(|value| format!(" type=\"{value}\""))
        .unwrap_or_default();

    match &message.translation {
        TranslationText::Numerus(forms) if message.numerus => {
            let _ = writeln!(out, "{pad}<translation{type_attr}>");
            let form_pad = INDENT.repeat(3);
            for form in forms {
                let _ = write!(out, "{form_pad}<numerusform");
                write_variants(out, &form_pad, form);
                out.push_str("</numerusform>\n");
            }
            let _ = writeln!(out, "{pad}</translation>");
        }
        text => {
            let _ = write!(out, "{pad}<translation{type_attr}");
            write_variants(out, &pad, text.raw(0));
            out.push_str("</translation>\n");
        }
    }

    let _ = writeln!(out, "{INDENT}</message>");
}

/// 写出开始标签的剩余部分、内容与缩进；含长度变体时每个变体一个 <lengthvariant>
fn write_variants(out: &mut String, pad: &str, text: &str) {
    if !text.contains(VARIANT_SEPARATOR) {
        out.push('>');
        out.push_str(&escape(text));
        return;
    }
    out.push_str(" variants=\"yes\">");
    for variant in text.split(VARIANT_SEPARATOR) {
        let _ = write!(
            out,
            "\n{pad}{INDENT}<lengthvariant>{}</lengthvariant>",
            escape(variant)
        );
    }
    let _ = write!(out, "\n{pad}");
}

/// 元素文本转义；不可直接出现在 XML 中的控制字符写为 <byte value="xHH"/>
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(|c: char| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r')) {
        out.push_str(&escape_attr(&rest[..pos]));
        let _ = write!(out, "<byte value=\"x{:x}\"/>", rest.as_bytes()[pos]);
        rest = &rest[pos + 1..];
    }
    out.push_str(&escape_attr(rest));
    out
}
