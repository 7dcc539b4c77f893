// ============================================================================
// CopyDeck - 文案存储
// ============================================================================
//
// 文件: src/core/storage.rs
// 职责: 文案表与存储文件 (JSON / TOML / YAML) 之间的转换
// 边界:
//   - ✅ 单表序列化 / 反序列化（保持源顺序）
//   - ✅ 按 <目录>/<语言>/<分区>.<扩展名> 布局读写
//   - ✅ 目录扫描与语言、分区推断
//   - ❌ 不应包含校验逻辑（重复键等交给校验器报告）
//   - ❌ 不应包含用户交互
//
// ============================================================================

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use walkdir::WalkDir;

use crate::copy::{CopyTable, Locale, Partition};
use crate::core::error::{CopyError, Result};

/// 存储格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    Json,
    Toml,
    Yaml,
}

impl StorageFormat {
    /// 写出文件时使用的扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Toml => "toml",
            StorageFormat::Yaml => "yaml",
        }
    }

    /// 根据文件扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for StorageFormat {
    type Err = CopyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(StorageFormat::Json),
            "toml" => Ok(StorageFormat::Toml),
            "yaml" | "yml" => Ok(StorageFormat::Yaml),
            other => Err(CopyError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 有序键值对；反序列化时保留源顺序与重复键
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries(pub Vec<(String, String)>);

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a flat map of copy keys to strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// 从存储文件加载（或准备写出）的一张文案表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTable {
    pub locale: Locale,
    pub partition: Partition,
    pub entries: Entries,
    /// 来源文件，内置表导出前为空
    pub source: Option<PathBuf>,
}

impl StoredTable {
    /// 复制一张内置表
    pub fn from_table(locale: Locale, table: &dyn CopyTable) -> Self {
        Self {
            locale,
            partition: table.partition(),
            entries: Entries(table.entries()),
            source: None,
        }
    }

    /// 序列化为指定格式
    pub fn to_string(&self, format: StorageFormat) -> Result<String> {
        let text = match format {
            StorageFormat::Json => {
                let mut text = serde_json::to_string_pretty(&self.entries)?;
                text.push('\n');
                text
            }
            StorageFormat::Toml => toml::to_string(&self.entries)?,
            StorageFormat::Yaml => serde_yaml::to_string(&self.entries)?,
        };
        Ok(text)
    }

    /// 从指定格式解析
    pub fn from_str(
        locale: Locale,
        partition: Partition,
        format: StorageFormat,
        text: &str,
    ) -> Result<Self> {
        let entries: Entries = match format {
            StorageFormat::Json => serde_json::from_str(text)?,
            StorageFormat::Toml => toml::from_str(text)?,
            StorageFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(Self {
            locale,
            partition,
            entries,
            source: None,
        })
    }

    /// 该表在存储目录中的相对路径
    pub fn relative_path(&self, format: StorageFormat) -> PathBuf {
        PathBuf::from(self.locale.as_str())
            .join(format!("{}.{}", self.partition.as_str(), format.extension()))
    }

    /// 写入 `<dir>/<locale>/<partition>.<ext>`，返回写出的路径
    pub fn write_to(&self, dir: &Path, format: StorageFormat, force: bool) -> Result<PathBuf> {
        let path = dir.join(self.relative_path(format));
        if path.exists() && !force {
            return Err(CopyError::AlreadyExists(path));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CopyError::io(parent, e))?;
        }
        let text = self.to_string(format)?;
        fs::write(&path, text).map_err(|e| CopyError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote copy table");
        Ok(path)
    }

    /// 加载单个文件，语言取自上级目录名，分区取自文件名
    pub fn load_file(path: &Path) -> Result<Self> {
        let format = StorageFormat::from_path(path)?;
        let partition = infer_partition(path)?;
        let locale = infer_locale(path)?;
        let text = fs::read_to_string(path).map_err(|e| CopyError::io(path, e))?;
        let mut table = Self::from_str(locale, partition, format, &text)?;
        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    /// 第一个匹配键的文案
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl CopyTable for StoredTable {
    fn partition(&self) -> Partition {
        self.partition
    }

    fn keys(&self) -> Vec<String> {
        self.entries.0.iter().map(|(k, _)| k.clone()).collect()
    }

    fn get(&self, key: &str) -> Option<&str> {
        StoredTable::get(self, key)
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.entries.0.clone()
    }

    fn unused_keys(&self) -> &'static [&'static str] {
        Locale::REFERENCE.copy().table(self.partition).unused_keys()
    }
}

fn infer_partition(path: &Path) -> Result<Partition> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    stem.parse()
        .map_err(|_| CopyError::UnknownPartition(stem.to_string()))
}

fn infer_locale(path: &Path) -> Result<Locale> {
    let dir = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    dir.parse()
        .map_err(|_| CopyError::UnknownLocale(dir.to_string()))
}

/// 扫描目录下全部可识别的存储文件
///
/// 扩展名、语言或分区无法识别的文件会被跳过；识别成功但内容无法解析的文件
/// 视为错误返回。
pub fn load_dir(dir: &Path) -> Result<Vec<StoredTable>> {
    let mut tables = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            CopyError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if StorageFormat::from_path(path).is_err() {
            tracing::debug!(path = %path.display(), "skipping file with unknown extension");
            continue;
        }
        if infer_partition(path).is_err() || infer_locale(path).is_err() {
            tracing::debug!(path = %path.display(), "skipping file outside <locale>/<partition> layout");
            continue;
        }

        tables.push(StoredTable::load_file(path)?);
    }

    tracing::debug!(dir = %dir.display(), count = tables.len(), "loaded copy tables");
    Ok(tables)
}

/// 把内置文案导出到目录
///
/// 未指定 `force` 时先检查全部目标文件，任一已存在则不写入任何文件。
pub fn export(
    dir: &Path,
    locales: &[Locale],
    partitions: &[Partition],
    format: StorageFormat,
    force: bool,
) -> Result<Vec<PathBuf>> {
    let tables: Vec<StoredTable> = locales
        .iter()
        .flat_map(|locale| {
            partitions
                .iter()
                .map(move |partition| StoredTable::from_table(*locale, locale.copy().table(*partition)))
        })
        .collect();

    if !force {
        if let Some(existing) = tables
            .iter()
            .map(|table| dir.join(table.relative_path(format)))
            .find(|path| path.exists())
        {
            return Err(CopyError::AlreadyExists(existing));
        }
    }

    tables
        .iter()
        .map(|table| table.write_to(dir, format, force))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(entries: &[(&str, &str)]) -> StoredTable {
        StoredTable {
            locale: Locale::Zh,
            partition: Partition::Nav,
            entries: Entries(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            source: None,
        }
    }

    #[test]
    fn json_round_trip_keeps_every_builtin_table() {
        for locale in Locale::all() {
            for partition in Partition::all() {
                let table = StoredTable::from_table(*locale, locale.copy().table(*partition));
                let text = table.to_string(StorageFormat::Json).unwrap();
                let parsed =
                    StoredTable::from_str(*locale, *partition, StorageFormat::Json, &text).unwrap();
                assert_eq!(parsed, table, "{}/{}", locale, partition);
            }
        }
    }

    #[test]
    fn toml_and_yaml_round_trip_markup_and_whitespace() {
        let table = sample(&[
            ("index_2_headline", "TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>"),
            ("nav_version_between", ", "),
            ("sample", "// 第一行, \n第二行\n  "),
        ]);
        for format in [StorageFormat::Toml, StorageFormat::Yaml] {
            let text = table.to_string(format).unwrap();
            let parsed = StoredTable::from_str(Locale::Zh, Partition::Nav, format, &text).unwrap();
            assert_eq!(parsed.entries, table.entries, "{}", format);
        }
    }

    #[test]
    fn json_keeps_source_order_and_duplicates() {
        let text = r#"{ "b": "2", "a": "1", "b": "3" }"#;
        let table = StoredTable::from_str(Locale::Zh, Partition::Nav, StorageFormat::Json, text)
            .unwrap();
        assert_eq!(table.keys(), vec!["b", "a", "b"]);
        assert_eq!(table.get("b"), Some("2"));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err = StoredTable::from_str(
            Locale::Zh,
            Partition::Nav,
            StorageFormat::Json,
            r#"{ "nav_download": 1 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CopyError::Json(_)));
    }

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(
            StorageFormat::from_path(Path::new("zh/nav.yml")).unwrap(),
            StorageFormat::Yaml
        );
        assert!(matches!(
            StorageFormat::from_path(Path::new("zh/nav.ts")),
            Err(CopyError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn export_then_load_dir_restores_tables() {
        let dir = tempfile::tempdir().unwrap();
        let written = export(
            dir.path(),
            &[Locale::Zh],
            &[Partition::Nav, Partition::Index],
            StorageFormat::Json,
            false,
        )
        .unwrap();
        assert_eq!(written.len(), 2);
        fs::write(dir.path().join("README.md"), "not a table").unwrap();

        let tables = load_dir(dir.path()).unwrap();
        assert_eq!(tables.len(), 2);
        let index = tables
            .iter()
            .find(|t| t.partition == Partition::Index)
            .unwrap();
        assert_eq!(index.locale, Locale::Zh);
        assert_eq!(
            index.get("index_2_headline"),
            Some("TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>")
        );
    }

    #[test]
    fn write_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let table = StoredTable::from_table(Locale::En, &Locale::En.copy().handbook);
        table.write_to(dir.path(), StorageFormat::Toml, false).unwrap();
        assert!(matches!(
            table.write_to(dir.path(), StorageFormat::Toml, false),
            Err(CopyError::AlreadyExists(_))
        ));
        assert!(table.write_to(dir.path(), StorageFormat::Toml, true).is_ok());
    }

    #[test]
    fn refused_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        export(dir.path(), &[Locale::Zh], &[Partition::Nav], StorageFormat::Json, false).unwrap();

        let err = export(
            dir.path(),
            Locale::all(),
            Partition::all(),
            StorageFormat::Json,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CopyError::AlreadyExists(ref p) if p.ends_with("zh/nav.json")));

        let files: Vec<PathBuf> = WalkDir::new(dir.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();
        assert_eq!(files, vec![dir.path().join("zh").join("nav.json")]);

        let all = export(dir.path(), Locale::all(), Partition::all(), StorageFormat::Json, true).unwrap();
        assert_eq!(all.len(), Locale::all().len() * Partition::all().len());
    }
}
