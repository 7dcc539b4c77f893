// ============================================================================
// CopyDeck - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 检查结果与文案列表的终端显示
// 边界:
//   - ✅ 检查结果表格显示
//   - ✅ 统计信息格式化输出
//   - ✅ 文案条目列表显示
//   - ✅ 国际化文本支持
//   - ❌ 不应包含检查逻辑
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含数据处理逻辑
//
// ============================================================================

use anyhow::Result;
use std::io::{self, Write};

use crate::core::checker::{CheckReport, Issue, Severity, TableReport};
use crate::core::storage::StoredTable;
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, RULE};
use crate::utils::logger::Logger;
use crate::utils::styles::TextStyles;
use crate::{t, tf};

// ============================================================================
// 检查结果汇总显示
// ============================================================================

/// 打印检查报告
///
/// 非 detail 模式下只统计提示级问题（未翻译条目），不逐条列出。
pub fn print_check_report(report: &CheckReport, detail: bool) -> Result<()> {
    Logger::info("");
    Logger::info(TextStyles::bold(&t!("check.details")));
    Logger::info(RULE);

    for table in &report.tables {
        print_table_report(table, detail);
    }

    print_check_summary(report, detail);
    let _ = io::stdout().flush();
    Ok(())
}

/// 打印单张表的结果
fn print_table_report(table: &TableReport, detail: bool) {
    if table.issues.is_empty() {
        Logger::success(tf!("check.table_clean", table.locale, table.partition));
        return;
    }

    let infos = table.count(Severity::Info);
    Logger::info(tf!(
        "check.table_header",
        Colors::info(table.locale.as_str()),
        table.partition,
        table.entries
    ));
    Logger::info(format!(
        "  {}",
        tf!(
            "check.table_counts",
            table.count(Severity::Error),
            table.count(Severity::Warning),
            infos
        )
    ));

    for issue in &table.issues {
        if issue.severity == Severity::Info && !detail {
            continue;
        }
        print_issue(issue);
    }

    if !detail && infos > 0 {
        Logger::info(format!(
            "  {}",
            Colors::secondary(&tf!("check.untranslated_hidden", infos))
        ));
    }
    Logger::info("");
}

/// 打印单条问题
fn print_issue(issue: &Issue) {
    let icon = match issue.severity {
        Severity::Error => Colors::error(icons::ERROR),
        Severity::Warning => Colors::warn(icons::WARNING),
        Severity::Info => Colors::hint(icons::INFO),
    };
    let label = issue_label(issue);
    let line = match &issue.detail {
        Some(detail) => format!("  {} {} {} ({})", icon, issue.key, label, detail),
        None => format!("  {} {} {}", icon, issue.key, label),
    };

    match issue.severity {
        Severity::Error => Logger::error(line),
        Severity::Warning => Logger::warn(line),
        Severity::Info => Logger::info(line),
    }
}

/// 问题类型的本地化名称
pub fn issue_label(issue: &Issue) -> String {
    t!(&format!("issue.{}", issue.kind.as_str()))
}

/// 打印汇总行
fn print_check_summary(report: &CheckReport, detail: bool) {
    Logger::info(format!(
        "{} {}",
        icons::SUMMARY,
        tf!(
            "check.summary",
            report.tables.len(),
            report.count(Severity::Error),
            report.count(Severity::Warning),
            report.count(Severity::Info)
        )
    ));

    if detail {
        for (kind, count) in report.count_by_kind() {
            let label = t!(&format!("issue.{}", kind));
            Logger::info(format!("  {}", tf!("check.kind_count", label, count)));
        }
    }
}

// ============================================================================
// 文案列表显示
// ============================================================================

/// 按源顺序打印一张表的条目，未使用的条目以暗色显示
pub fn print_entries(table: &StoredTable, unused: &[&str]) -> Result<()> {
    let entries = &table.entries.0;
    Logger::info(TextStyles::bold(&tf!(
        "show.header",
        table.locale,
        table.partition,
        entries.len()
    )));
    Logger::info(RULE);

    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in entries {
        let line = format!(
            "{} {:width$} {} {}",
            icons::ENTRY,
            key,
            icons::ARROW,
            single_line(value),
            width = width
        );
        if unused.contains(&key.as_str()) {
            println!("{}", TextStyles::dim(&line));
        } else {
            println!("{}", line);
        }
    }

    let unused_count = entries
        .iter()
        .filter(|(k, _)| unused.contains(&k.as_str()))
        .count();
    if unused_count > 0 {
        Logger::info(Colors::secondary(&tf!("show.unused_hint", unused_count)));
    }

    let _ = io::stdout().flush();
    Ok(())
}

/// 把换行显示为转义序列，保证每个条目占一行
fn single_line(value: &str) -> String {
    value.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_values_are_escaped() {
        assert_eq!(single_line("a\nb"), "a\\nb");
        assert_eq!(single_line("no break"), "no break");
    }
}
