//! 内置文案表的完整性测试：逐语言、逐分区比对参考表

use std::collections::HashSet;

use copydeck::core::checker::{CheckOptions, CopyChecker, IssueKind, Severity};
use copydeck::core::markup;
use copydeck::core::storage::{self, StorageFormat, StoredTable};
use copydeck::{CopyTable, Locale, Partition};
use rstest::rstest;

fn table(locale: Locale, partition: Partition) -> &'static dyn CopyTable {
    locale.copy().table(partition)
}

#[rstest]
fn keys_match_reference(
    #[values(Locale::En, Locale::Zh)] locale: Locale,
    #[values(
        Partition::Nav,
        Partition::Playground,
        Partition::Handbook,
        Partition::Documentation,
        Partition::Cheatsheets,
        Partition::Index
    )]
    partition: Partition,
) {
    let reference: HashSet<String> = table(Locale::REFERENCE, partition).keys().into_iter().collect();
    let keys = table(locale, partition).keys();
    let unique: HashSet<String> = keys.iter().cloned().collect();

    assert_eq!(unique.len(), keys.len(), "duplicate key in {}/{}", locale, partition);
    assert_eq!(unique, reference);
}

#[rstest]
fn values_are_present_and_balanced(
    #[values(Locale::En, Locale::Zh)] locale: Locale,
    #[values(
        Partition::Nav,
        Partition::Playground,
        Partition::Handbook,
        Partition::Documentation,
        Partition::Cheatsheets,
        Partition::Index
    )]
    partition: Partition,
) {
    for (key, value) in table(locale, partition).entries() {
        assert!(!value.is_empty(), "{}/{}/{} is empty", locale, partition, key);
        assert_eq!(markup::check_balance(&value), Ok(()), "{}/{}/{}", locale, partition, key);
    }
}

#[rstest]
fn markup_matches_reference(
    #[values(
        Partition::Nav,
        Partition::Playground,
        Partition::Handbook,
        Partition::Documentation,
        Partition::Cheatsheets,
        Partition::Index
    )]
    partition: Partition,
) {
    let reference = table(Locale::REFERENCE, partition);
    for (key, value) in table(Locale::Zh, partition).entries() {
        let expected = reference.get(&key).map(markup::tag_signature);
        assert_eq!(Some(markup::tag_signature(&value)), expected, "{}/{}", partition, key);
    }
}

#[rstest]
fn round_trip_is_lossless(
    #[values(Locale::En, Locale::Zh)] locale: Locale,
    #[values(StorageFormat::Json, StorageFormat::Toml, StorageFormat::Yaml)] format: StorageFormat,
) {
    for partition in Partition::all() {
        let stored = StoredTable::from_table(locale, table(locale, *partition));
        let text = stored.to_string(format).unwrap();
        let parsed = StoredTable::from_str(locale, *partition, format, &text).unwrap();
        assert_eq!(parsed.entries.0, table(locale, *partition).entries());
    }
}

#[test]
fn nav_playground_is_not_translated() {
    assert_eq!(Locale::Zh.copy().get(Partition::Nav, "nav_playground"), Some("Playground"));
}

#[test]
fn homepage_headline_survives_storage() {
    let expected = "TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>";
    assert_eq!(Locale::Zh.copy().index.index_2_headline, expected);

    let stored = StoredTable::from_table(Locale::Zh, table(Locale::Zh, Partition::Index));
    let text = stored.to_string(StorageFormat::Json).unwrap();
    let parsed = StoredTable::from_str(Locale::Zh, Partition::Index, StorageFormat::Json, &text).unwrap();
    assert_eq!(parsed.get("index_2_headline"), Some(expected));
}

#[test]
fn builtin_locales_pass_strict_check() {
    let checker = CopyChecker::new(CheckOptions::default());
    let report = checker.check_builtin(Locale::all());

    assert_eq!(report.tables.len(), Locale::all().len() * Partition::all().len());
    assert!(!report.has_failures(true), "{:?}", report.count_by_kind());
}

#[test]
fn untranslated_entries_are_informational() {
    let checker = CopyChecker::new(CheckOptions::default());
    let report = checker.check_builtin(&[Locale::Zh]);

    let untranslated: Vec<_> = report
        .tables
        .iter()
        .flat_map(|t| &t.issues)
        .filter(|i| i.kind == IssueKind::Untranslated)
        .collect();
    assert!(untranslated.iter().all(|i| i.severity == Severity::Info));
    assert!(untranslated.iter().any(|i| i.key == "nav_playground"));
}

#[test]
fn edited_export_is_caught_by_checker() {
    let dir = tempfile::tempdir().unwrap();
    storage::export(dir.path(), &[Locale::Zh], &[Partition::Nav], StorageFormat::Json, false).unwrap();

    let path = dir.path().join("zh").join("nav.json");
    let text = std::fs::read_to_string(&path).unwrap();
    let edited = text.replacen("\"Playground\"", "\"<strong>Playground\"", 1);
    assert_ne!(edited, text);
    std::fs::write(&path, edited).unwrap();

    let tables = storage::load_dir(dir.path()).unwrap();
    let report = CopyChecker::new(CheckOptions::default()).check_stored(&tables);
    assert!(report.has_errors());
    assert_eq!(report.count_by_kind().get("unbalanced_markup"), Some(&1));
}
