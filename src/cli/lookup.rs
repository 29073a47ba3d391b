// ============================================================================
// TsTable - CLI Lookup 命令
// ============================================================================
//
// 文件: src/cli/lookup.rs
// 职责: 译文查找命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用翻译器执行查找
//   - ✅ 条目详情输出
//   - ❌ 不应包含回退策略实现
//   - ❌ 不应包含 XML 解析逻辑
//
// ============================================================================

use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

use crate::core::{LookupOptions, Translator};
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::tf;

/// 查找源文本的译文
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// 翻译表文件
    pub file: PathBuf,

    /// 源文本
    pub source: String,

    /// 上下文（默认使用配置 lookup.default_context）
    #[arg(short, long)]
    pub context: Option<String>,

    /// 消歧注释
    #[arg(long)]
    pub comment: Option<String>,

    /// 复数查找的数量，替换译文中的 %n
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub count: Option<i64>,

    /// 使用未完成但非空的译文
    #[arg(long)]
    pub include_unfinished: bool,

    /// 显示条目详情
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_lookup(args: LookupArgs) -> Result<()> {
    let lookup_config = Config::get_lookup();
    let context = args
        .context
        .clone()
        .unwrap_or(lookup_config.default_context);
    let options = LookupOptions {
        include_unfinished: args.include_unfinished || lookup_config.include_unfinished,
    };

    let translator = Translator::load(&args.file, options)
        .with_context(|| tf!("error.load_failed", args.file.display()))?;

    let text = match (args.count, args.comment.as_deref()) {
        (Some(n), Some(comment)) => {
            translator.lookup_plural_with_comment(&context, &args.source, comment, n)
        }
        (Some(n), None) => translator.lookup_plural(&context, &args.source, n),
        (None, Some(comment)) => translator
            .lookup_with_comment(&context, &args.source, comment)
            .to_string(),
        (None, None) => translator.lookup(&context, &args.source).to_string(),
    };
    println!("{}", text);

    if args.detail {
        let entry = match args.comment.as_deref() {
            Some(comment) => translator.get_with_comment(&context, &args.source, comment),
            None => translator.get(&context, &args.source),
        };
        match entry {
            Some(entry) => summary::print_entry(&context, entry),
            None => Logger::warn(tf!("lookup.not_found", context, args.source)),
        }
    }

    Ok(())
}
