// ============================================================================
// CopyDeck - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与公共类型导出
// 边界:
//   - ✅ 文案表 (copy) 与检查、存储 (core) 的公开接口
//   - ✅ CLI 所需模块
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod cli;
pub mod copy;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use copy::{CopyTable, Locale, LocaleCopy, Partition};
