// ============================================================================
// CopyDeck - 错误类型
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 存储层与标记扫描的类型化错误
// 边界:
//   - ✅ 存储读写、解析错误
//   - ✅ 占位标记配对错误
//   - ❌ 不应包含校验结论（校验结果是数据，不是错误）
//   - ❌ 不应包含 CLI 输出
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// 存储层错误
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON copy document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML copy document: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to encode TOML copy document: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("invalid YAML copy document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("unknown partition '{0}'")]
    UnknownPartition(String),

    #[error("unsupported storage format '{0}' (expected json, toml or yaml)")]
    UnsupportedFormat(String),

    #[error("{0} already exists")]
    AlreadyExists(PathBuf),
}

impl CopyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CopyError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 占位标记配对错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("closing tag </{found}> has no matching opening tag")]
    UnexpectedClose { found: String },

    #[error("expected </{expected}> but found </{found}>")]
    Mismatched { expected: String, found: String },

    #[error("tag <{0}> is never closed")]
    Unclosed(String),
}

pub type Result<T> = std::result::Result<T, CopyError>;
