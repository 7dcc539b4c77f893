// ============================================================================
// CopyDeck - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod checker;
pub mod error;
pub mod markup;
pub mod storage;

// 重新导出常用类型
pub use checker::{CheckOptions, CheckReport, CopyChecker, Issue, IssueKind, Severity};
pub use error::{CopyError, MarkupError};
pub use storage::{StorageFormat, StoredTable};
