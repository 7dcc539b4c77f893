// ============================================================================
// CopyDeck - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod export;
pub mod get;
pub mod init;
pub mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs, CONFIG_FILE_NAME};
use check::{handle_check, CheckArgs};
use export::{handle_export, ExportArgs};
use get::{handle_get, GetArgs};
use init::{handle_init, InitArgs};
use show::{handle_show, ShowArgs};

/// CopyDeck - Localized site copy tables and integrity checker
#[derive(Debug, Parser)]
#[command(name = "copydeck")]
#[command(about = "Localized site copy tables and content integrity checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (default: ./copydeck.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one copy entry
    Get(GetArgs),
    /// List the entries of a partition
    Show(ShowArgs),
    /// Check copy tables for content integrity
    Check(CheckArgs),
    /// Write copy tables to storage files
    Export(ExportArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli(cli: Cli) -> Result<()> {
    // init 允许指向尚不存在的配置文件
    let config_path = match (&cli.command, &cli.config) {
        (Commands::Init(_), Some(path)) if !path.exists() => None,
        (_, path) => path.as_deref(),
    };
    Config::initialize(config_path)?;

    // Merge runtime args to global config
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    match cli.command {
        Commands::Get(args) => handle_get(args),
        Commands::Show(args) => handle_show(args),
        Commands::Check(args) => handle_check(args),
        Commands::Export(args) => handle_export(args),
        Commands::Init(args) => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            handle_init(args, &path)
        }
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
    }
}

/// 通用结果输出函数
pub(crate) fn output_results<T, F>(format: &str, data: &T, detail: bool, print_table: F) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T, bool) -> Result<()>,
{
    match format {
        "json" => {
            println!("{}", render_json(data)?);
        }
        _ => {
            print_table(data, detail)?;
        }
    }
    Ok(())
}

/// 机器可读的 JSON 文本
pub(crate) fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::{Locale, Partition};
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn get_parses_partition_and_locale() {
        let cli = Cli::parse_from(["copydeck", "get", "nav", "nav_playground", "--locale", "en"]);
        match cli.command {
            Commands::Get(args) => {
                assert_eq!(args.partition, Partition::Nav);
                assert_eq!(args.key, "nav_playground");
                assert_eq!(args.locale, Some(Locale::En));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_become_runtime_args() {
        let cli = Cli::parse_from(["copydeck", "check", "--no-color", "-v", "-l", "zh_cn"]);
        let args = build_runtime_args(&cli);
        assert_eq!(args.verbose, Some(true));
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.language.as_deref(), Some("zh_cn"));
    }

    #[test]
    fn check_accepts_repeated_locales() {
        let cli = Cli::parse_from(["copydeck", "check", "--locale", "en", "--locale", "zh", "--strict"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.locale, vec![Locale::En, Locale::Zh]);
                assert!(args.strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn json_output_skips_table_printer() {
        let mut printed = false;
        output_results("json", &vec![1, 2], false, |_, _| {
            printed = true;
            Ok(())
        })
        .unwrap();
        assert!(!printed);
    }
}
