// ============================================================================
// CopyDeck - 文案完整性检查器
// ============================================================================
//
// 文件: src/core/checker.rs
// 职责: 文案表内容完整性检查核心逻辑
// 边界:
//   - ✅ 键集合比对（缺失、多余、重复）
//   - ✅ 空文案检测
//   - ✅ 占位标记配对、词汇与参考文案一致性
//   - ✅ 序列化往返一致性
//   - ✅ 未翻译条目统计
//   - ❌ 不应包含CLI参数处理
//   - ❌ 不应包含输出格式化
//   - ❌ 不应修改或自动翻译任何文案
//
// ============================================================================

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::copy::{CopyTable, Locale, Partition};
use crate::core::markup;
use crate::core::storage::{Entries, StorageFormat, StoredTable};

/// 问题严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 问题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// 参考表中有、译文表中缺失
    MissingKey,
    /// 译文表中有、参考表中没有
    ExtraKey,
    DuplicateKey,
    EmptyValue,
    UnbalancedMarkup,
    /// 序列化后再解析得到的键值对与原表不一致
    RoundTrip,
    UnknownTag,
    /// 与参考文案使用的标记不同
    MarkupMismatch,
    /// 与参考文案完全相同，视为未翻译
    Untranslated,
}

impl IssueKind {
    /// 该类问题的严重程度
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::MissingKey
            | IssueKind::ExtraKey
            | IssueKind::DuplicateKey
            | IssueKind::EmptyValue
            | IssueKind::UnbalancedMarkup
            | IssueKind::RoundTrip => Severity::Error,
            IssueKind::UnknownTag | IssueKind::MarkupMismatch => Severity::Warning,
            IssueKind::Untranslated => Severity::Info,
        }
    }

    /// 用于本地化消息的键名
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingKey => "missing_key",
            IssueKind::ExtraKey => "extra_key",
            IssueKind::DuplicateKey => "duplicate_key",
            IssueKind::EmptyValue => "empty_value",
            IssueKind::UnbalancedMarkup => "unbalanced_markup",
            IssueKind::RoundTrip => "round_trip",
            IssueKind::UnknownTag => "unknown_tag",
            IssueKind::MarkupMismatch => "markup_mismatch",
            IssueKind::Untranslated => "untranslated",
        }
    }
}

/// 单条检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub key: String,
    /// 补充说明（标记错误、未知标记名等）
    pub detail: Option<String>,
}

impl Issue {
    fn new(kind: IssueKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            key: key.into(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// 单张表的检查结果
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub locale: Locale,
    pub partition: Partition,
    pub entries: usize,
    pub issues: Vec<Issue>,
}

impl TableReport {
    /// 指定严重程度的问题数
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// 检查汇总
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub tables: Vec<TableReport>,
}

impl CheckReport {
    /// 所有表中指定严重程度的问题数
    pub fn count(&self, severity: Severity) -> usize {
        self.tables.iter().map(|t| t.count(severity)).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// 是否应以失败结束；严格模式下警告也算失败
    pub fn has_failures(&self, strict: bool) -> bool {
        self.has_errors() || (strict && self.count(Severity::Warning) > 0)
    }

    /// 按问题类型统计
    pub fn count_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for issue in self.tables.iter().flat_map(|t| &t.issues) {
            *counts.entry(issue.kind.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// 检查器设置
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// 允许出现的占位标记名
    pub allowed_tags: Vec<String>,
    /// 是否报告与参考文案相同的条目
    pub report_untranslated: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            allowed_tags: markup::default_vocabulary(),
            report_untranslated: true,
        }
    }
}

/// 文案完整性检查器
pub struct CopyChecker {
    options: CheckOptions,
}

impl CopyChecker {
    /// 创建新的检查器
    pub fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    /// 按参考表检查一张表
    ///
    /// `locale` 为参考语言时不做未翻译检查。
    pub fn check(
        &self,
        locale: Locale,
        reference: &dyn CopyTable,
        table: &dyn CopyTable,
    ) -> Vec<Issue> {
        let untranslated = self.options.report_untranslated && locale != Locale::REFERENCE;
        let entries = table.entries();
        let mut issues = Vec::new();

        self.check_key_parity(reference, &entries, &mut issues);
        self.check_duplicates(&entries, &mut issues);

        for (key, value) in &entries {
            self.check_value(reference, table, key, value, untranslated, &mut issues);
        }

        self.check_round_trip(table, &entries, &mut issues);

        tracing::debug!(
            partition = %table.partition(),
            entries = entries.len(),
            issues = issues.len(),
            "checked copy table"
        );
        issues
    }

    /// 检查一张表并生成报告
    pub fn check_table(
        &self,
        locale: Locale,
        reference: &dyn CopyTable,
        table: &dyn CopyTable,
    ) -> TableReport {
        TableReport {
            locale,
            partition: table.partition(),
            entries: table.entries().len(),
            issues: self.check(locale, reference, table),
        }
    }

    /// 检查内置语言的全部分区
    pub fn check_builtin(&self, locales: &[Locale]) -> CheckReport {
        let reference = Locale::REFERENCE.copy();
        let mut report = CheckReport::default();
        for locale in locales {
            let copy = locale.copy();
            for partition in Partition::all() {
                report.tables.push(self.check_table(
                    *locale,
                    reference.table(*partition),
                    copy.table(*partition),
                ));
            }
        }
        report
    }

    /// 检查从存储目录加载的表
    pub fn check_stored(&self, tables: &[StoredTable]) -> CheckReport {
        let reference = Locale::REFERENCE.copy();
        let mut report = CheckReport::default();
        for table in tables {
            report.tables.push(self.check_table(
                table.locale,
                reference.table(table.partition),
                table,
            ));
        }
        report
    }
}

// ============================================================================
// 键集合检查
// ============================================================================

impl CopyChecker {
    /// 缺失与多余的键
    fn check_key_parity(
        &self,
        reference: &dyn CopyTable,
        entries: &[(String, String)],
        issues: &mut Vec<Issue>,
    ) {
        let present: HashSet<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        let expected = reference.keys();
        let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();

        for key in &expected {
            if !present.contains(key.as_str()) {
                issues.push(Issue::new(IssueKind::MissingKey, key.as_str()));
            }
        }

        let mut reported = HashSet::new();
        for (key, _) in entries {
            if !expected_set.contains(key.as_str()) && reported.insert(key.as_str()) {
                issues.push(Issue::new(IssueKind::ExtraKey, key.as_str()));
            }
        }
    }

    /// 重复键，每个键只报告一次
    fn check_duplicates(&self, entries: &[(String, String)], issues: &mut Vec<Issue>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (key, _) in entries {
            let count = seen.entry(key.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                issues.push(Issue::new(IssueKind::DuplicateKey, key.as_str()));
            }
        }
    }
}

// ============================================================================
// 单条文案检查
// ============================================================================

impl CopyChecker {
    fn check_value(
        &self,
        reference: &dyn CopyTable,
        table: &dyn CopyTable,
        key: &str,
        value: &str,
        untranslated: bool,
        issues: &mut Vec<Issue>,
    ) {
        if value.is_empty() {
            issues.push(Issue::new(IssueKind::EmptyValue, key));
            return;
        }

        let vocabulary = &self.options.allowed_tags;
        if let Err(err) = markup::check_balance_known(value, vocabulary) {
            issues.push(Issue::new(IssueKind::UnbalancedMarkup, key).with_detail(err.to_string()));
        }

        let mut unknown: Vec<String> = markup::tag_signature(value)
            .into_iter()
            .filter(|name| !vocabulary.contains(name))
            .collect();
        unknown.dedup();
        if !unknown.is_empty() {
            issues.push(Issue::new(IssueKind::UnknownTag, key).with_detail(unknown.join(", ")));
        }

        let Some(reference_value) = reference.get(key) else {
            return;
        };

        let expected_tags = markup::tag_signature_known(reference_value, vocabulary);
        let actual_tags = markup::tag_signature_known(value, vocabulary);
        if expected_tags != actual_tags {
            issues.push(Issue::new(IssueKind::MarkupMismatch, key).with_detail(format!(
                "[{}] -> [{}]",
                expected_tags.join(", "),
                actual_tags.join(", ")
            )));
        }

        if untranslated
            && reference_value == value
            && !table.unused_keys().contains(&key)
            && !is_language_neutral(value)
        {
            issues.push(Issue::new(IssueKind::Untranslated, key));
        }
    }

    /// 序列化为 JSON 后再解析，键值对须逐字节一致
    fn check_round_trip(
        &self,
        table: &dyn CopyTable,
        entries: &[(String, String)],
        issues: &mut Vec<Issue>,
    ) {
        let stored = StoredTable {
            locale: Locale::REFERENCE,
            partition: table.partition(),
            entries: Entries(entries.to_vec()),
            source: None,
        };

        let parsed = stored.to_string(StorageFormat::Json).and_then(|text| {
            StoredTable::from_str(stored.locale, stored.partition, StorageFormat::Json, &text)
        });

        match parsed {
            Ok(parsed) => {
                for (index, original) in entries.iter().enumerate() {
                    if parsed.entries.0.get(index) != Some(original) {
                        issues.push(Issue::new(IssueKind::RoundTrip, original.0.as_str()));
                    }
                }
            }
            Err(err) => {
                issues.push(Issue::new(IssueKind::RoundTrip, "*").with_detail(err.to_string()));
            }
        }
    }
}

/// 不含任何字母的文案（标点、分隔符等）无需翻译
fn is_language_neutral(value: &str) -> bool {
    !value.chars().any(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(partition: Partition, entries: &[(&str, &str)]) -> StoredTable {
        StoredTable {
            locale: Locale::Zh,
            partition,
            entries: Entries(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            source: None,
        }
    }

    /// 以中文内置表为底，替换部分条目
    fn handbook_with(overrides: &[(&str, &str)]) -> StoredTable {
        let mut table = StoredTable::from_table(Locale::Zh, &Locale::Zh.copy().handbook);
        for (key, value) in overrides {
            if let Some(entry) = table.entries.0.iter_mut().find(|(k, _)| k == key) {
                entry.1 = value.to_string();
            }
        }
        table
    }

    fn kinds(issues: &[Issue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn builtin_tables_have_no_errors_or_warnings() {
        let report = CopyChecker::new(CheckOptions::default()).check_builtin(Locale::all());
        assert_eq!(report.tables.len(), Locale::all().len() * Partition::all().len());
        assert_eq!(report.count(Severity::Error), 0, "{:#?}", report);
        assert_eq!(report.count(Severity::Warning), 0, "{:#?}", report);
        assert!(!report.has_failures(true));
    }

    #[test]
    fn deliberately_untranslated_chinese_entries_are_reported_as_info() {
        let report = CopyChecker::new(CheckOptions::default()).check_builtin(&[Locale::Zh]);
        let playground = report
            .tables
            .iter()
            .find(|t| t.partition == Partition::Playground)
            .unwrap();
        assert!(playground
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::Untranslated && i.key == "play_toolbar_run"));

        let docs = report
            .tables
            .iter()
            .find(|t| t.partition == Partition::Documentation)
            .unwrap();
        assert!(!docs
            .issues
            .iter()
            .any(|i| i.key == "doc_headline_examples_title"));
    }

    #[test]
    fn reference_locale_is_never_untranslated() {
        let report = CopyChecker::new(CheckOptions::default()).check_builtin(&[Locale::En]);
        assert_eq!(report.count(Severity::Info), 0);
    }

    #[test]
    fn missing_extra_and_duplicate_keys_are_errors() {
        let reference = &Locale::En.copy().cheatsheets;
        let table = stored(
            Partition::Cheatsheets,
            &[
                ("cht_layout_title", "速查表"),
                ("cht_layout_title", "速查表"),
                ("cht_unknown", "多余"),
            ],
        );
        let issues = CopyChecker::new(CheckOptions::default()).check(Locale::Zh, reference, &table);
        let missing = issues.iter().filter(|i| i.kind == IssueKind::MissingKey).count();
        assert_eq!(missing, reference.entries().len() - 1);
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::ExtraKey && i.key == "cht_unknown"));
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.kind == IssueKind::DuplicateKey)
                .count(),
            1
        );
    }

    #[test]
    fn empty_value_is_an_error() {
        let table = handbook_with(&[("handb_next", "")]);
        let issues =
            CopyChecker::new(CheckOptions::default()).check(Locale::Zh, &Locale::En.copy().handbook, &table);
        assert_eq!(kinds(&issues), vec![IssueKind::EmptyValue]);
        assert_eq!(issues[0].key, "handb_next");
    }

    #[test]
    fn broken_markup_is_reported_with_detail() {
        let table = handbook_with(&[("handb_thanks", "感谢<strong>您的反馈")]);
        let issues =
            CopyChecker::new(CheckOptions::default()).check(Locale::Zh, &Locale::En.copy().handbook, &table);
        let unbalanced = issues
            .iter()
            .find(|i| i.kind == IssueKind::UnbalancedMarkup)
            .unwrap();
        assert_eq!(unbalanced.key, "handb_thanks");
        assert!(unbalanced.detail.as_deref().unwrap().contains("strong"));
        assert!(issues.iter().any(|i| i.kind == IssueKind::MarkupMismatch));
    }

    #[test]
    fn unknown_tags_follow_configured_vocabulary() {
        let table = handbook_with(&[("handb_thanks", "感谢<em>您的</em>反馈")]);
        let checker = CopyChecker::new(CheckOptions::default());
        let issues = checker.check(Locale::Zh, &Locale::En.copy().handbook, &table);
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::UnknownTag && i.detail.as_deref() == Some("em")));

        let mut options = CheckOptions::default();
        options.allowed_tags.push("em".to_string());
        let issues = CopyChecker::new(options).check(Locale::Zh, &Locale::En.copy().handbook, &table);
        assert!(!issues.iter().any(|i| i.kind == IssueKind::UnknownTag));
    }

    #[test]
    fn generic_type_text_is_only_an_unknown_tag_warning() {
        let table = stored(Partition::Nav, &[("nav_tools", "Array<string> 工具")]);
        let report = CopyChecker::new(CheckOptions::default()).check_stored(&[table]);
        let counts = report.count_by_kind();
        assert_eq!(counts.get("unknown_tag"), Some(&1));
        assert_eq!(counts.get("unbalanced_markup"), None);
        assert_eq!(counts.get("markup_mismatch"), None);
    }

    #[test]
    fn untranslated_reporting_can_be_disabled() {
        let options = CheckOptions {
            report_untranslated: false,
            ..CheckOptions::default()
        };
        let report = CopyChecker::new(options).check_builtin(&[Locale::Zh]);
        assert_eq!(report.count(Severity::Info), 0);
    }

    #[test]
    fn strict_mode_fails_on_warnings() {
        let table = handbook_with(&[("handb_thanks", "感谢<em>您的</em>反馈")]);
        let report = CopyChecker::new(CheckOptions::default()).check_stored(&[table]);
        assert!(!report.has_errors());
        assert!(!report.has_failures(false));
        assert!(report.has_failures(true));
        assert_eq!(report.count_by_kind().get("unknown_tag"), Some(&1));
    }
}
