// ============================================================================
// CopyDeck - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 国际化支持和翻译管理
// 边界:
//   - ✅ 翻译表初始化和管理
//   - ✅ 翻译宏定义和实现
//   - ✅ 语言切换支持
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含站点文案表
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    // 每次都从配置获取语言设置
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());

    lookup(&language, key).unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 在指定语言的翻译表中查找
fn lookup(language: &str, key: &str) -> Option<String> {
    let translation_data = match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS, // 默认使用英文
    };

    translation_data
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

/// 从配置获取语言设置
fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    // 尝试获取配置中的语言设置
    // 如果配置未初始化或获取失败，返回 None
    Config::get_language().ok()
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut offset = 0;
    for arg in args.iter() {
        // 只在已替换内容之后查找下一个 {} 占位符
        let Some(pos) = result[offset..].find("{}").map(|p| p + offset) else {
            break;
        };
        result.replace_range(pos..pos + 2, arg);
        offset = pos + arg.len();
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keys(table: &[(&str, &str)]) -> HashSet<String> {
        table.iter().map(|(k, _)| k.to_string()).collect()
    }

    fn placeholders(value: &str) -> usize {
        value.matches("{}").count()
    }

    #[test]
    fn tables_share_keys_and_placeholders() {
        assert_eq!(keys(en_us::TRANSLATIONS), keys(zh_cn::TRANSLATIONS));
        for (key, en) in en_us::TRANSLATIONS {
            let zh = lookup("zh_cn", key).unwrap();
            assert_eq!(placeholders(en), placeholders(&zh), "{}", key);
        }
    }

    #[test]
    fn unknown_language_uses_english() {
        assert_eq!(lookup("fr", "check.all_good"), lookup("en_us", "check.all_good"));
        assert_eq!(lookup("en_us", "no.such.key"), None);
    }

    #[test]
    fn args_fill_placeholders_in_order() {
        let text = format_with_args("{} / {}".to_string(), vec!["zh".into(), "nav".into()]);
        assert_eq!(text, "zh / nav");
    }

    #[test]
    fn args_containing_braces_are_not_refilled() {
        let text = format_with_args(
            "Key '{}' not found in {} ({})".to_string(),
            vec!["{}".into(), "nav".into(), "zh".into()],
        );
        assert_eq!(text, "Key '{}' not found in nav (zh)");
    }

    #[test]
    fn extra_args_are_ignored() {
        let text = format_with_args("only {}".to_string(), vec!["one".into(), "two".into()]);
        assert_eq!(text, "only one");
    }
}
