// ============================================================================
// CopyDeck - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 初始化诊断日志并运行 CLI
// 边界:
//   - ✅ tracing 订阅器初始化 (COPYDECK_LOG)
//   - ✅ 顶层错误输出与退出码
//   - ❌ 不应包含命令实现
//
// ============================================================================

use clap::Parser;
use tracing_subscriber::EnvFilter;

use copydeck::cli::{run_cli, Cli};
use copydeck::tf;
use copydeck::utils::logger::Logger;

/// 诊断日志过滤环境变量
const LOG_ENV: &str = "COPYDECK_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_cli(cli) {
        Logger::error(tf!("error.command_failed", format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// 诊断日志写到 stderr，默认只输出警告；--verbose 时为 debug
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
