// ============================================================================
// CopyDeck - Show 命令
// ============================================================================
//
// 文件: src/cli/show.rs
// 职责: 按源顺序列出一个分区的全部文案
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 表格或 JSON 输出
//   - ❌ 不应包含格式化细节 (交给 ui::summary)
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::cli::output_results;
use crate::copy::{Locale, Partition};
use crate::core::storage::StoredTable;
use crate::models::config::Config;
use crate::ui::summary;

/// 列出分区文案
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// 分区
    #[arg(value_enum)]
    pub partition: Partition,

    /// 语言，默认取配置中的 copy.default_locale
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,
}

pub fn handle_show(args: ShowArgs) -> Result<()> {
    let locale = args.locale.unwrap_or_else(Config::get_default_locale);
    let table = locale.copy().table(args.partition);
    let unused = table.unused_keys();
    let stored = StoredTable::from_table(locale, table);

    output_results(&args.format, &stored.entries, false, |_, _| {
        summary::print_entries(&stored, unused)
    })
}
