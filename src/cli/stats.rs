// ============================================================================
// TsTable - CLI Stats 命令
// ============================================================================
//
// 文件: src/cli/stats.rs
// 职责: 翻译进度统计命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 结果输出（表格/JSON）
//   - ❌ 不应包含统计计算逻辑
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::core::{catalog_stats, parser, CatalogStats};
use crate::tf;
use crate::ui::summary;

/// 显示翻译进度
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// 翻译表文件或目录（默认扫描工作区）
    pub paths: Vec<PathBuf>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct FileStats {
    file: PathBuf,
    #[serde(flatten)]
    stats: CatalogStats,
}

pub fn handle_stats(args: StatsArgs) -> Result<()> {
    let tables = super::collect_tables(&args.paths)?;

    let mut results = Vec::new();
    for file in tables {
        let catalog =
            parser::load(&file).with_context(|| tf!("error.load_failed", file.display()))?;
        results.push(FileStats {
            stats: catalog_stats(&catalog),
            file,
        });
    }

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        "table" | _ => {
            for result in &results {
                summary::print_stats_table(&result.file, &result.stats);
            }
        }
    }

    Ok(())
}
