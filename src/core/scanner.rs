// ============================================================================
// TsTable - 翻译表扫描器
// ============================================================================
//
// 文件: src/core/scanner.rs
// 职责: 在工作区中查找 .ts 翻译表文件
// 边界:
//   - ✅ 目录递归遍历
//   - ✅ 忽略模式匹配
//   - ✅ 区分 XML 翻译表与同扩展名的 TypeScript 源文件
//   - ❌ 不应包含翻译表解析逻辑
//   - ❌ 不应读取全局配置
//
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// 翻译表扫描器
pub struct CatalogScanner {
    root: PathBuf,
    ignore: Vec<glob::Pattern>,
}

impl CatalogScanner {
    /// 创建扫描器，无效的忽略模式会被跳过
    pub fn new(root: impl Into<PathBuf>, ignore: &[String]) -> Self {
        let ignore = ignore
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "invalid ignore pattern");
                    None
                }
            })
            .collect();
        Self {
            root: root.into(),
            ignore,
        }
    }

    /// 扫描并返回排序后的翻译表路径
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_ignore(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ts"))
            .filter(|path| looks_like_xml(path))
            .collect();
        found.sort();
        debug!(root = %self.root.display(), count = found.len(), "scanned for translation tables");
        found
    }

    /// 检查路径是否应该被忽略
    fn should_ignore(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative_str = relative.to_string_lossy();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.ignore.iter().any(|pattern| {
            // 匹配文件名、完整相对路径，或开头的路径组件
            pattern.matches(&name)
                || pattern.matches(&relative_str)
                || relative.starts_with(pattern.as_str())
        })
    }
}

/// 文件首个非空白字符是否为 '<'
fn looks_like_xml(path: &Path) -> bool {
    let mut head = [0u8; 256];
    let read = match File::open(path).and_then(|mut f| f.read(&mut head)) {
        Ok(n) => n,
        Err(_) => return false,
    };
    let head = &head[..read];
    let head = head.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(head);
    head.iter()
        .find(|b| !b.is_ascii_whitespace())
        .map(|b| *b == b'<')
        .unwrap_or(false)
}
