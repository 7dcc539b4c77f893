// ============================================================================
// CopyDeck - Export 命令
// ============================================================================
//
// 文件: src/cli/export.rs
// 职责: 把内置文案写成存储文件
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 覆盖保护提示
//   - ❌ 不应包含序列化细节 (交给 core::storage)
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::copy::{Locale, Partition};
use crate::core::error::CopyError;
use crate::core::storage::{self, StorageFormat};
use crate::models::config::Config;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 导出文案表
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// 输出目录
    #[arg(short, long)]
    pub out: PathBuf,

    /// 要导出的语言，可重复；默认全部
    #[arg(long, value_enum)]
    pub locale: Vec<Locale>,

    /// 要导出的分区，可重复；默认全部
    #[arg(long, value_enum)]
    pub partition: Vec<Partition>,

    /// 文件格式
    #[arg(short = 'f', long, value_enum, default_value_t = StorageFormat::Json)]
    pub format: StorageFormat,

    /// 覆盖已存在的文件
    #[arg(long)]
    pub force: bool,
}

pub fn handle_export(args: ExportArgs) -> Result<()> {
    if args.out.exists() && !args.out.is_dir() {
        anyhow::bail!(tf!("error.out_not_dir", args.out.display()));
    }

    let locales = or_all(&args.locale, Locale::all());
    let partitions = or_all(&args.partition, Partition::all());
    Logger::info(tf!(
        "export.start",
        locales.len() * partitions.len(),
        args.out.display()
    ));

    let written = match storage::export(&args.out, &locales, &partitions, args.format, args.force) {
        Ok(written) => written,
        Err(e @ CopyError::AlreadyExists(_)) => {
            Logger::warn(t!("export.use_force_hint"));
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if Config::get_verbose() {
        for path in &written {
            Logger::info(tf!("export.written", path.display()));
        }
    }
    Logger::success(tf!("export.completed", written.len(), args.format));
    Ok(())
}

/// 未指定时取全部
fn or_all<T: Copy>(selected: &[T], all: &[T]) -> Vec<T> {
    if selected.is_empty() {
        all.to_vec()
    } else {
        selected.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_everything() {
        assert_eq!(or_all(&[], Locale::all()), Locale::all().to_vec());
        assert_eq!(or_all(&[Partition::Index], Partition::all()), vec![Partition::Index]);
    }
}
