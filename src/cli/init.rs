// ============================================================================
// TsTable - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 生成 tstable.toml 配置文件
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 以当前生效配置（含 -C、-l）生成配置文件
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应直接输出错误，错误交由入口统一处理
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

use crate::models::config::{Config, CONFIG_FILE_NAME};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径（默认当前目录下的 tstable.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    let path = args
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if path.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", path.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    let template = Config::snapshot()?.to_template();
    template
        .save_to_file(&path)
        .with_context(|| tf!("init.create_failed", path.display()))?;

    Logger::success(tf!("init.config_created", path.display()));
    Logger::info(tf!(
        "init.settings",
        template.workspace.root,
        template.i18n.language
    ));
    Logger::info(t!("init.next_steps"));
    Ok(())
}
