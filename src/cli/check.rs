// ============================================================================
// CopyDeck - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 文案完整性检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 选择检查对象 (内置语言或存储目录)
//   - ✅ 调用核心检查器执行检查
//   - ✅ 检查结果格式化输出与退出码
//   - ❌ 不应包含具体检查逻辑
//   - ❌ 不应包含文件解析逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::output_results;
use crate::copy::Locale;
use crate::core::checker::{CheckReport, CopyChecker};
use crate::core::storage;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查文案完整性
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 要检查的语言，可重复；默认取配置中的 copy.locales
    #[arg(long, value_enum)]
    pub locale: Vec<Locale>,

    /// 检查存储目录 (<dir>/<locale>/<partition>.<ext>) 而不是内置文案
    #[arg(long)]
    pub dir: Option<PathBuf>,

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

pub fn handle_check(args: CheckArgs) -> Result<()> {
    // JSON 模式下 stdout 只输出报告本身
    let chatty = !is_machine_readable(&args.format);
    if chatty {
        Logger::info(t!("cli.check.start"));
    }

    let config = Config::snapshot();
    let checker = CopyChecker::new(config.check_options());

    let report = match &args.dir {
        Some(dir) => check_dir(&checker, dir, &args.locale, chatty)?,
        None => {
            let locales = if args.locale.is_empty() {
                config.copy.locales.clone()
            } else {
                args.locale.clone()
            };
            let names: Vec<&str> = locales.iter().map(Locale::as_str).collect();
            if chatty {
                Logger::info(tf!("cli.check.builtin", names.join(", ")));
            }
            checker.check_builtin(&locales)
        }
    };

    output_results(&args.format, &report, args.detail, summary::print_check_report)?;

    let strict = args.strict || config.check.strict;
    if report.has_failures(strict) {
        if chatty && !report.has_errors() {
            Logger::warn(t!("check.strict_warnings"));
        }
        Logger::error(t!("check.failed"));
        std::process::exit(1);
    }

    if chatty {
        Logger::success(t!("check.all_good"));
    }
    Ok(())
}

fn is_machine_readable(format: &str) -> bool {
    format == "json"
}

/// 加载并检查存储目录，`locales` 非空时只检查这些语言
fn check_dir(
    checker: &CopyChecker,
    dir: &Path,
    locales: &[Locale],
    chatty: bool,
) -> Result<CheckReport> {
    if !dir.is_dir() {
        anyhow::bail!(tf!("error.dir_not_exist", dir.display()));
    }
    if chatty {
        Logger::info(tf!("cli.check.loading_dir", dir.display()));
    }

    let mut tables = storage::load_dir(dir)
        .with_context(|| format!("failed to load copy tables from {}", dir.display()))?;
    if !locales.is_empty() {
        tables.retain(|t| locales.contains(&t.locale));
    }
    if tables.is_empty() {
        anyhow::bail!(tf!("error.no_tables_found", dir.display()));
    }

    Ok(checker.check_stored(&tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::render_json;
    use crate::copy::Partition;
    use crate::core::checker::CheckOptions;

    #[test]
    fn exported_directory_checks_clean() {
        let dir = tempfile::tempdir().unwrap();
        storage::export(
            dir.path(),
            &[Locale::Zh],
            Partition::all(),
            storage::StorageFormat::Yaml,
            false,
        )
        .unwrap();

        let checker = CopyChecker::new(CheckOptions::default());
        let report = check_dir(&checker, dir.path(), &[], false).unwrap();
        assert_eq!(report.tables.len(), Partition::all().len());
        assert!(!report.has_failures(true));
    }

    #[test]
    fn locale_filter_can_leave_nothing_to_check() {
        let dir = tempfile::tempdir().unwrap();
        storage::export(
            dir.path(),
            &[Locale::Zh],
            &[Partition::Nav],
            storage::StorageFormat::Json,
            false,
        )
        .unwrap();

        let checker = CopyChecker::new(CheckOptions::default());
        assert!(check_dir(&checker, dir.path(), &[Locale::En], false).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let checker = CopyChecker::new(CheckOptions::default());
        assert!(check_dir(&checker, &dir.path().join("absent"), &[], false).is_err());
    }

    #[test]
    fn json_report_is_a_single_document() {
        assert!(is_machine_readable("json"));
        assert!(!is_machine_readable("table"));

        let report = CopyChecker::new(CheckOptions::default()).check_builtin(&[Locale::Zh]);
        let text = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tables"].as_array().unwrap().len(), Partition::all().len());
        assert_eq!(value["tables"][0]["locale"], "zh");
    }
}
