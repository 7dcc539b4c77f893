// ============================================================================
// CopyDeck - Get 命令
// ============================================================================
//
// 文件: src/cli/get.rs
// 职责: 查询单条文案
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 原样输出文案（不裁剪空白）
//   - ❌ 不应在缺失时回退到其他语言
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::copy::{Locale, Partition};
use crate::models::config::Config;
use crate::tf;

/// 查询单条文案
#[derive(Debug, Args)]
pub struct GetArgs {
    /// 分区
    #[arg(value_enum)]
    pub partition: Partition,

    /// 文案键
    pub key: String,

    /// 语言，默认取配置中的 copy.default_locale
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
}

pub fn handle_get(args: GetArgs) -> Result<()> {
    let locale = args.locale.unwrap_or_else(Config::get_default_locale);
    let value = lookup(locale, args.partition, &args.key)?;
    println!("{}", value);
    Ok(())
}

/// 查找文案，缺失时返回本地化错误
fn lookup(locale: Locale, partition: Partition, key: &str) -> Result<&'static str> {
    tracing::debug!(%locale, %partition, key, "lookup");
    match locale.copy().table(partition).get(key) {
        Some(value) => Ok(value),
        None => anyhow::bail!(tf!("error.unknown_key", key, partition, locale)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_value_verbatim() {
        assert_eq!(lookup(Locale::Zh, Partition::Nav, "nav_playground").unwrap(), "Playground");
        let sample = lookup(Locale::Zh, Partition::Playground, "play_default_code_sample").unwrap();
        assert!(sample.ends_with("  "));
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(lookup(Locale::Zh, Partition::Nav, "nav_unknown").is_err());
    }
}
