// ============================================================================
// TsTable - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 翻译表检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用检查器执行检查
//   - ✅ 结果输出（表格/JSON）与退出码
//   - ❌ 不应包含检查规则实现
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::core::checker::{has_errors, CheckOptions, Checker, Issue, Severity};
use crate::core::parser;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查翻译表一致性
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 翻译表文件或目录（默认扫描工作区）
    pub paths: Vec<PathBuf>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(short = 'd', long)]
    pub detail: bool,

    /// 警告也视为失败
    #[arg(long)]
    pub strict: bool,
}

/// 单个文件的检查结果
#[derive(Debug, Serialize)]
struct FileReport {
    file: PathBuf,
    issues: Vec<Issue>,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let check_config = Config::get_check();
    let strict = args.strict || check_config.strict;
    let checker = Checker::new(CheckOptions {
        placeholders: check_config.placeholders,
    });

    let tables = super::collect_tables(&args.paths)?;
    let json = args.format == "json";
    if !json {
        Logger::info(tf!("check.start", tables.len()));
    }

    let mut reports = Vec::new();
    for file in tables {
        let catalog =
            parser::load(&file).with_context(|| tf!("error.load_failed", file.display()))?;
        let issues = checker.check(&catalog);
        reports.push(FileReport { file, issues });
    }

    let failed = reports.iter().any(|report| {
        has_errors(&report.issues)
            || (strict && report.issues.iter().any(|i| i.severity == Severity::Warning))
    });

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        "table" | _ => {
            for report in &reports {
                if report.issues.is_empty() {
                    Logger::success(tf!("check.file_clean", report.file.display()));
                } else {
                    summary::print_issues_table(&report.file, &report.issues, args.detail);
                }
            }
        }
    }

    if failed {
        if !json {
            Logger::error(t!("check.failed"));
        }
        std::process::exit(1);
    } else if !json {
        Logger::success(t!("check.all_good"));
    }

    Ok(())
}
