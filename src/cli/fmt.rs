// ============================================================================
// TsTable - CLI Fmt 命令
// ============================================================================
//
// 文件: src/cli/fmt.rs
// 职责: 以规范格式重写翻译表，可选清理已消失条目
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 规范格式比对（--check）
//   - ✅ 写回文件
//   - ❌ 不应包含序列化格式细节
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

use crate::core::{parser, writer};
use crate::utils::logger::Logger;
use crate::tf;

/// 规范化翻译表
#[derive(Debug, Args)]
pub struct FmtArgs {
    /// 翻译表文件
    pub file: PathBuf,

    /// 输出文件（默认覆盖原文件）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 删除已消失（vanished）的条目
    #[arg(long)]
    pub prune_vanished: bool,

    /// 只检查是否已是规范格式，不写文件
    #[arg(long)]
    pub check: bool,
}

pub fn handle_fmt(args: FmtArgs) -> Result<()> {
    let original = std::fs::read_to_string(&args.file)
        .with_context(|| tf!("error.load_failed", args.file.display()))?;
    let mut catalog =
        parser::parse_str(&original).with_context(|| tf!("error.load_failed", args.file.display()))?;

    if args.prune_vanished {
        let removed = catalog.prune_vanished();
        Logger::info(tf!("fmt.pruned", removed));
    }

    let formatted = writer::to_string(&catalog);

    if args.check {
        if formatted == original {
            Logger::success(tf!("fmt.already_formatted", args.file.display()));
            return Ok(());
        }
        Logger::warn(tf!("fmt.needs_format", args.file.display()));
        std::process::exit(1);
    }

    let target = args.output.as_ref().unwrap_or(&args.file);
    std::fs::write(target, formatted).with_context(|| tf!("error.write_failed", target.display()))?;
    Logger::success(tf!("fmt.written", catalog.len(), target.display()));
    Ok(())
}
