// ============================================================================
// TsTable - 翻译表解析器
// ============================================================================
//
// 文件: src/core/parser.rs
// 职责: 将 TS XML 文档解析为 Catalog
// 边界:
//   - ✅ XML 事件流解析
//   - ✅ 相对位置（line="+N"、省略 filename）解析为绝对位置
//   - ✅ 实体与 <byte> 控制字符还原
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含校验规则
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::models::{
    Catalog, Context, Location, TranslationEntry, TranslationStatus, TranslationText,
    VARIANT_SEPARATOR,
};

/// 从文件加载翻译表
pub fn load(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_str(&content)?;
    debug!(
        path = %path.display(),
        contexts = catalog.contexts.len(),
        messages = catalog.len(),
        "loaded translation table"
    );
    Ok(catalog)
}

/// 从字符串解析翻译表
pub fn parse_str(xml: &str) -> Result<Catalog> {
    let xml = xml.trim_start_matches('\u{feff}');
    let mut reader = Reader::from_str(xml);
    let mut state = TsReader::default();

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                state.start(&e, position)?;
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e);
                if name == "byte" {
                    state.byte(&e, position)?;
                } else {
                    state.start(&e, position)?;
                    state.end();
                }
            }
            Ok(Event::End(_)) => state.end(),
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| CatalogError::xml(reader.buffer_position(), e))?;
                state.text.push_str(&text);
            }
            Ok(Event::CData(c)) => {
                state.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Ok(Event::Eof) => break,
            // 声明、DOCTYPE、注释、处理指令
            Ok(_) => {}
            Err(e) => return Err(CatalogError::xml(reader.buffer_position(), e)),
        }
    }

    state
        .catalog
        .ok_or_else(|| CatalogError::xml(xml.len(), "document has no <TS> root element"))
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attributes(e: &BytesStart, position: usize) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| CatalogError::xml(position, err))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| CatalogError::xml(position, err))?
            .into_owned();
        map.insert(key, value);
    }
    Ok(map)
}

/// 正在构建的消息
#[derive(Debug, Default)]
struct MessageBuilder {
    entry: Option<TranslationEntry>,
    has_translation: bool,
    numerus_forms: Vec<String>,
    /// 当前 translation / numerusform 内已读到的 lengthvariant
    variants: Vec<String>,
}

impl MessageBuilder {
    /// 有长度变体时以分隔符连接，否则使用元素自身的文本
    fn take_text(&mut self, text: String) -> String {
        if self.variants.is_empty() {
            text
        } else {
            let separator = VARIANT_SEPARATOR.to_string();
            std::mem::take(&mut self.variants).join(separator.as_str())
        }
    }
}

/// 解析状态
#[derive(Debug, Default)]
struct TsReader {
    catalog: Option<Catalog>,
    context: Option<Context>,
    message: Option<MessageBuilder>,
    stack: Vec<String>,
    text: String,
    /// 当前上下文内上一条消息的第一个文件
    current_file: String,
    /// 当前消息内最近一次出现的文件
    message_file: String,
    /// 当前上下文内每个文件最近一次出现的行号
    current_lines: HashMap<String, i64>,
}

impl TsReader {
    fn parent(&self) -> &str {
        self.stack.last().map(String::as_str).unwrap_or("")
    }

    fn expect_parent(&self, element: &str, parent: &str) -> Result<()> {
        if self.parent() == parent {
            Ok(())
        } else {
            Err(CatalogError::unexpected_element(element, self.parent()))
        }
    }

    fn entry_mut(&mut self) -> Option<&mut TranslationEntry> {
        self.message.as_mut().and_then(|m| m.entry.as_mut())
    }

    fn start(&mut self, e: &BytesStart, position: usize) -> Result<()> {
        let name = element_name(e);
        self.text.clear();

        if self.stack.is_empty() {
            if name != "TS" {
                return Err(CatalogError::UnexpectedRoot(name));
            }
            let attrs = attributes(e, position)?;
            let mut catalog = Catalog::default();
            if let Some(version) = attrs.get("version") {
                catalog.version = version.clone();
            }
            catalog.language = attrs.get("language").cloned();
            catalog.source_language = attrs.get("sourcelanguage").cloned();
            self.catalog = Some(catalog);
            self.stack.push(name);
            return Ok(());
        }

        match name.as_str() {
            "context" => {
                self.expect_parent(&name, "TS")?;
                self.context = Some(Context::default());
                self.current_file.clear();
                self.message_file.clear();
                self.current_lines.clear();
            }
            "message" => {
                self.expect_parent(&name, "context")?;
                let attrs = attributes(e, position)?;
                let mut entry = TranslationEntry::unfinished("");
                entry.numerus = attrs.get("numerus").map(|v| v == "yes").unwrap_or(false);
                self.message = Some(MessageBuilder {
                    entry: Some(entry),
                    ..MessageBuilder::default()
                });
                self.message_file = self.current_file.clone();
            }
            "location" if self.parent() == "message" => {
                let attrs = attributes(e, position)?;
                let first = self.entry_mut().map(|e| e.locations.is_empty()).unwrap_or(true);
                let location = self.resolve_location(&attrs, first)?;
                if let Some(entry) = self.entry_mut() {
                    entry.locations.push(location);
                }
            }
            "translation" if self.parent() == "message" => {
                let attrs = attributes(e, position)?;
                let status = match attrs.get("type") {
                    Some(value) => TranslationStatus::from_attr(value).unwrap_or_else(|| {
                        warn!(value = %value, "unknown translation type, treating as finished");
                        TranslationStatus::Finished
                    }),
                    None => TranslationStatus::Finished,
                };
                if let Some(message) = self.message.as_mut() {
                    message.has_translation = true;
                    message.numerus_forms.clear();
                    message.variants.clear();
                    if let Some(entry) = message.entry.as_mut() {
                        entry.status = status;
                    }
                }
            }
            "numerusform" => {
                if let Some(message) = self.message.as_mut() {
                    message.variants.clear();
                }
            }
            "name" | "source" | "comment" | "oldsource" | "oldcomment" | "extracomment"
            | "translatorcomment" | "lengthvariant" => {}
            other => debug!(element = other, parent = self.parent(), "skipping unknown element"),
        }

        self.stack.push(name);
        Ok(())
    }

    fn end(&mut self) {
        let name = self.stack.pop().unwrap_or_default();
        let parent = self.parent().to_string();
        let text = std::mem::take(&mut self.text);

        match (name.as_str(), parent.as_str()) {
            ("name", "context") => {
                if let Some(context) = self.context.as_mut() {
                    context.name = text;
                }
            }
            ("source", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.source = text;
                }
            }
            ("comment", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.comment = text;
                }
            }
            ("oldsource", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.old_source = Some(text);
                }
            }
            ("oldcomment", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.old_comment = Some(text);
                }
            }
            ("extracomment", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.extra_comment = Some(text);
                }
            }
            ("translatorcomment", "message") => {
                if let Some(entry) = self.entry_mut() {
                    entry.translator_comment = Some(text);
                }
            }
            ("lengthvariant", "translation") | ("lengthvariant", "numerusform") => {
                if let Some(message) = self.message.as_mut() {
                    message.variants.push(text);
                }
            }
            ("numerusform", "translation") => {
                if let Some(message) = self.message.as_mut() {
                    let form = message.take_text(text);
                    message.numerus_forms.push(form);
                }
            }
            ("translation", "message") => {
                if let Some(message) = self.message.as_mut() {
                    let text = message.take_text(text);
                    let forms = std::mem::take(&mut message.numerus_forms);
                    if let Some(entry) = message.entry.as_mut() {
                        entry.translation = if entry.numerus {
                            TranslationText::Numerus(forms)
                        } else {
                            TranslationText::Single(text)
                        };
                    }
                }
            }
            ("message", "context") => {
                if let Some(mut message) = self.message.take() {
                    if let Some(mut entry) = message.entry.take() {
                        if !message.has_translation {
                            entry.status = TranslationStatus::Unfinished;
                            if entry.numerus {
                                entry.translation = TranslationText::Numerus(Vec::new());
                            }
                        }
                        if let Some(context) = self.context.as_mut() {
                            context.messages.push(entry);
                        }
                    }
                }
            }
            ("context", "TS") => {
                if let (Some(context), Some(catalog)) = (self.context.take(), self.catalog.as_mut())
                {
                    catalog.contexts.push(context);
                }
            }
            _ => {}
        }
    }

    /// 处理 <byte value="x1"/>，把控制字符追加到当前文本
    fn byte(&mut self, e: &BytesStart, position: usize) -> Result<()> {
        let attrs = attributes(e, position)?;
        let value = attrs.get("value").map(String::as_str).unwrap_or("");
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        match code.and_then(char::from_u32) {
            Some(ch) => self.text.push(ch),
            None => warn!(value = %value, "ignoring invalid <byte> value"),
        }
        Ok(())
    }

    /// 省略 filename 时沿用本消息上一个位置的文件；消息的第一个位置沿用上一条消息的第一个文件
    fn resolve_location(
        &mut self,
        attrs: &HashMap<String, String>,
        first: bool,
    ) -> Result<Location> {
        let filename = match attrs.get("filename") {
            Some(filename) => {
                if first {
                    self.current_file = filename.clone();
                }
                self.message_file = filename.clone();
                filename.clone()
            }
            None => self.message_file.clone(),
        };

        let line = match attrs.get("line") {
            Some(raw) => {
                let invalid = || CatalogError::InvalidLocation {
                    filename: filename.clone(),
                    line: raw.clone(),
                };
                let value = if raw.starts_with('+') || raw.starts_with('-') {
                    let delta: i64 = raw.parse().map_err(|_| invalid())?;
                    self.current_lines.get(&filename).copied().unwrap_or(0) + delta
                } else {
                    raw.parse::<i64>().map_err(|_| invalid())?
                };
                self.current_lines.insert(filename.clone(), value);
                Some(u32::try_from(value).map_err(|_| invalid())?)
            }
            None => None,
        };

        Ok(Location { filename, line })
    }
}
