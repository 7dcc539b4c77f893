// ============================================================================
// CopyDeck - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 面向用户的控制台输出
// 边界:
//   - ✅ 日志级别前缀
//   - ✅ 控制台输出控制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//   - ❌ 不应包含诊断日志 (由 tracing 负责)
//
// ============================================================================

use super::colors::Colors;
use super::constants::APP_NAME;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    /// 获取带颜色的级别前缀
    pub fn get_prefix(level: &str) -> String {
        match level {
            "WARN" => Colors::warn("[WARN]"),
            "ERROR" => Colors::error("[ERROR]"),
            "SUCCESS" => Colors::success(&format!("[{}]", APP_NAME)),
            _ => Colors::info(&format!("[{}]", APP_NAME)),
        }
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("INFO"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("WARN"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Self::get_prefix("ERROR"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("SUCCESS"), msg.as_ref());
    }
}
