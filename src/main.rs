// ============================================================================
// TsTable - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 运行 CLI 并统一输出错误
//
// ============================================================================

use tstable::utils::logger::Logger;

fn main() {
    if let Err(e) = tstable::cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
