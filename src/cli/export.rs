// ============================================================================
// TsTable - CLI Export 命令
// ============================================================================
//
// 文件: src/cli/export.rs
// 职责: 将翻译表导出为 JSON / YAML
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 导出格式选择与写出
//   - ❌ 不应包含 XML 解析逻辑
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::core::parser;
use crate::error::CatalogError;
use crate::models::Catalog;
use crate::tf;
use crate::utils::logger::Logger;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// 导出翻译表
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// 翻译表文件
    pub file: PathBuf,

    /// 输出格式
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// 输出文件（默认输出到标准输出）
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// 按格式序列化翻译表
pub fn render(catalog: &Catalog, format: ExportFormat) -> Result<String, CatalogError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(catalog)
            .map_err(|e| CatalogError::Serialize(e.to_string())),
        ExportFormat::Yaml => {
            serde_yaml::to_string(catalog).map_err(|e| CatalogError::Serialize(e.to_string()))
        }
    }
}

pub fn handle_export(args: ExportArgs) -> Result<()> {
    let catalog =
        parser::load(&args.file).with_context(|| tf!("error.load_failed", args.file.display()))?;
    let content = render(&catalog, args.format)?;

    match &args.output {
        Some(output) => {
            std::fs::write(output, content)
                .with_context(|| tf!("error.write_failed", output.display()))?;
            Logger::success(tf!("export.written", catalog.len(), output.display()));
        }
        None => println!("{}", content),
    }

    Ok(())
}
