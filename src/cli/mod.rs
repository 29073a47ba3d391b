// ============================================================================
// TsTable - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 翻译表路径收集
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod export;
pub mod fmt;
pub mod init;
pub mod lookup;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::CatalogScanner;
use crate::models::config::{Config, RuntimeArgs};
use crate::tf;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use export::{handle_export, ExportArgs};
use fmt::{handle_fmt, FmtArgs};
use init::{handle_init, InitArgs};
use lookup::{handle_lookup, LookupArgs};
use stats::{handle_stats, StatsArgs};

/// TsTable - Qt Linguist translation table tool
#[derive(Debug, Parser)]
#[command(name = "tstable")]
#[command(about = "Load, query and check Qt Linguist translation tables (.ts)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Workspace root directory
    #[arg(short = 'C', long, global = true)]
    pub workspace_root: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up the translation of a source string
    Lookup(LookupArgs),
    /// Check translation tables for consistency problems
    Check(CheckArgs),
    /// Show translation progress
    Stats(StatsArgs),
    /// Export a translation table as JSON or YAML
    Export(ExportArgs),
    /// Rewrite a translation table in canonical form
    Fmt(FmtArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Config lookup honours -C, so it happens after argument parsing
    Config::initialize(cli.workspace_root.as_deref().map(Path::new))?;

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    Config::merge_runtime_args(runtime_args)?;

    Colors::configure(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());

    match cli.command {
        Commands::Lookup(args) => handle_lookup(args),
        Commands::Check(args) => handle_check(args),
        Commands::Stats(args) => handle_stats(args),
        Commands::Export(args) => handle_export(args),
        Commands::Fmt(args) => handle_fmt(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        workspace_root: cli.workspace_root.clone(),
        language: cli.language.clone(),
    }
}

/// 收集要处理的翻译表：显式文件原样使用，目录递归扫描，未指定时扫描工作区根目录
pub(crate) fn collect_tables(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let ignore = Config::get_ignore_patterns();
    let roots = if paths.is_empty() {
        vec![Config::get_workspace_root()]
    } else {
        paths.to_vec()
    };

    let mut tables = Vec::new();
    for root in roots {
        if root.is_dir() {
            tables.extend(CatalogScanner::new(&root, &ignore).scan());
        } else if root.is_file() {
            tables.push(root);
        } else {
            anyhow::bail!(tf!("error.path_not_exist", root.display()));
        }
    }

    if tables.is_empty() {
        anyhow::bail!(crate::t!("error.no_tables_found"));
    }
    Ok(tables)
}
