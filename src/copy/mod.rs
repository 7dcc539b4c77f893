// ============================================================================
// CopyDeck - 文案表模块
// ============================================================================
//
// 文件: src/copy/mod.rs
// 职责: 站点文案表的结构定义、分区与语言索引
// 边界:
//   - ✅ 文案表结构声明宏
//   - ✅ 分区 (Partition) 与语言 (Locale) 枚举
//   - ✅ 按键查找 (只读、无副作用)
//   - ❌ 不应包含回退 (fallback) 逻辑，由外部渲染层决定
//   - ❌ 不应解释占位标记
//   - ❌ 不应包含校验逻辑
//
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 声明一个分区的文案表结构。
///
/// 每个字段即一个文案键，类型固定为 `&'static str`。各语言以 `const`
/// 实例提供内容，因此缺键、多键或重复键都会在编译期报错。
///
/// `unused = [...]` 列出上游作者标记为未使用、但仍需原样保留的键。
#[macro_export]
macro_rules! copy_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident for $partition:ident {
            $( $(#[$fmeta:meta])* $field:ident ),* $(,)?
        }
        $( unused = [ $($unused:ident),* $(,)? ]; )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: &'static str, )*
        }

        impl $name {
            /// 所属分区
            pub const PARTITION: $crate::copy::Partition = $crate::copy::Partition::$partition;

            /// 按源顺序排列的全部键
            pub const KEYS: &'static [&'static str] = &[$(stringify!($field)),*];

            /// 上游标记为未使用的键
            pub const UNUSED: &'static [&'static str] = &[$($(stringify!($unused)),*)?];

            /// 按键查找文案，原样返回
            pub fn get(&self, key: &str) -> Option<&'static str> {
                $(
                    if key == stringify!($field) {
                        return Some(self.$field);
                    }
                )*
                None
            }

            /// 按源顺序返回全部键值对
            pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
                vec![$((stringify!($field), self.$field)),*]
            }

            #[allow(dead_code)]
            fn unused_keys_are_fields(&self) {
                $($( let _ = self.$unused; )*)?
            }
        }

        impl $crate::copy::CopyTable for $name {
            fn partition(&self) -> $crate::copy::Partition {
                Self::PARTITION
            }

            fn keys(&self) -> Vec<String> {
                Self::KEYS.iter().map(|k| k.to_string()).collect()
            }

            fn get(&self, key: &str) -> Option<&str> {
                $name::get(self, key)
            }

            fn entries(&self) -> Vec<(String, String)> {
                $name::entries(self)
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            }

            fn unused_keys(&self) -> &'static [&'static str] {
                Self::UNUSED
            }
        }
    };
}

pub mod en;
pub mod schema;
pub mod zh;

pub use schema::{CheatCopy, DocCopy, HandbookCopy, IndexCopy, NavCopy, PlayCopy};

/// 文案表的统一只读视图
///
/// 内置表与从存储文件加载的表都实现该 trait，校验器据此一视同仁。
pub trait CopyTable: Send + Sync {
    /// 所属分区
    fn partition(&self) -> Partition;

    /// 全部键（源顺序，加载的表可能含重复键）
    fn keys(&self) -> Vec<String>;

    /// 查找文案；缺失时返回 `None`，不做任何回退
    fn get(&self, key: &str) -> Option<&str>;

    /// 全部键值对（源顺序）
    fn entries(&self) -> Vec<(String, String)>;

    /// 上游标记为未使用的键
    fn unused_keys(&self) -> &'static [&'static str] {
        &[]
    }
}

/// 文案分区
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// 顶部导航
    Nav,
    /// 在线演练场
    Playground,
    /// 手册页面
    Handbook,
    /// 文档首页
    Documentation,
    /// 速查表
    Cheatsheets,
    /// 站点首页
    Index,
}

impl Partition {
    /// 获取分区名（同时用作存储文件名）
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Nav => "nav",
            Partition::Playground => "playground",
            Partition::Handbook => "handbook",
            Partition::Documentation => "documentation",
            Partition::Cheatsheets => "cheatsheets",
            Partition::Index => "index",
        }
    }

    /// 获取所有分区
    pub fn all() -> &'static [Partition] {
        &[
            Partition::Nav,
            Partition::Playground,
            Partition::Handbook,
            Partition::Documentation,
            Partition::Cheatsheets,
            Partition::Index,
        ]
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Partition::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown partition: {}", s))
    }
}

/// 文案语言
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 英文，规范参考语言
    En,
    /// 简体中文
    #[default]
    Zh,
}

impl Locale {
    /// 规范参考语言，其余语言按它校验键集合
    pub const REFERENCE: Locale = Locale::En;

    /// 获取语言代码（同时用作存储目录名）
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// 获取所有内置语言
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh]
    }

    /// 获取该语言的全部内置文案
    pub fn copy(&self) -> &'static LocaleCopy {
        match self {
            Locale::En => &en::COPY,
            Locale::Zh => &zh::COPY,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown locale: {}", s))
    }
}

/// 单个语言的全部分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCopy {
    pub nav: NavCopy,
    pub playground: PlayCopy,
    pub handbook: HandbookCopy,
    pub documentation: DocCopy,
    pub cheatsheets: CheatCopy,
    pub index: IndexCopy,
}

impl LocaleCopy {
    /// 按分区取表
    pub fn table(&self, partition: Partition) -> &dyn CopyTable {
        match partition {
            Partition::Nav => &self.nav,
            Partition::Playground => &self.playground,
            Partition::Handbook => &self.handbook,
            Partition::Documentation => &self.documentation,
            Partition::Cheatsheets => &self.cheatsheets,
            Partition::Index => &self.index,
        }
    }

    /// 按分区与键查找
    pub fn get(&self, partition: Partition, key: &str) -> Option<&str> {
        self.table(partition).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_playground_is_returned_verbatim() {
        assert_eq!(zh::COPY.nav.get("nav_playground"), Some("Playground"));
        assert_eq!(zh::COPY.nav.nav_playground, "Playground");
    }

    #[test]
    fn homepage_headline_keeps_bold_span() {
        assert_eq!(
            Locale::Zh.copy().get(Partition::Index, "index_2_headline"),
            Some("TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>")
        );
    }

    #[test]
    fn absent_key_has_no_fallback() {
        assert_eq!(zh::COPY.nav.get("nav_missing"), None);
        assert_eq!(Locale::Zh.copy().get(Partition::Nav, "play_toolbar_run"), None);
    }

    #[test]
    fn entries_follow_declared_key_order() {
        let keys: Vec<&str> = zh::COPY.handbook.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, HandbookCopy::KEYS);
        assert_eq!(keys.first(), Some(&"handb_prev"));
    }

    #[test]
    fn dyn_table_matches_struct_lookup() {
        let table = Locale::Zh.copy().table(Partition::Playground);
        assert_eq!(table.partition(), Partition::Playground);
        assert_eq!(table.get("play_toolbar_run"), Some(zh::COPY.playground.play_toolbar_run));
        assert_eq!(table.keys().len(), PlayCopy::KEYS.len());
    }

    #[test]
    fn unused_keys_are_declared_only_for_documentation() {
        assert!(DocCopy::UNUSED.contains(&"doc_headline_examples_title"));
        assert!(NavCopy::UNUSED.is_empty());
        assert_eq!(
            Locale::En.copy().table(Partition::Documentation).unused_keys(),
            DocCopy::UNUSED
        );
    }

    #[test]
    fn names_parse_back() {
        for partition in Partition::all() {
            assert_eq!(partition.as_str().parse::<Partition>(), Ok(*partition));
        }
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::Zh));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn default_locale_is_chinese() {
        assert_eq!(Locale::default(), Locale::Zh);
        assert_ne!(Locale::default(), Locale::REFERENCE);
    }
}
