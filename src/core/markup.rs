// ============================================================================
// CopyDeck - 占位标记扫描
// ============================================================================
//
// 文件: src/core/markup.rs
// 职责: 识别文案中的占位标记并检查配对
// 边界:
//   - ✅ 标记切分 (开始 / 结束 / 自闭合)
//   - ✅ 配对检查
//   - ✅ 标记签名，用于译文与参考文案比对
//   - ❌ 不应改写文案内容
//   - ❌ 不应把标记渲染为真实 HTML
//
// ============================================================================

use std::sync::OnceLock;

use regex::Regex;

use crate::core::error::MarkupError;

/// 无需结束标记的标记名
const VOID_TAGS: &[&str] = &["br"];

/// 占位标记类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    SelfClosing,
}

/// 文案中的一个占位标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupToken {
    pub kind: TokenKind,
    pub name: String,
    /// 在文案中的字节偏移
    pub offset: usize,
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<(/)?([A-Za-z][A-Za-z0-9-]*)(\s+[^<>]*?)?\s*(/)?>")
            .expect("tag pattern is valid")
    })
}

/// 切分出文案中的全部占位标记，标记以外的文本忽略
pub fn tokenize(value: &str) -> Vec<MarkupToken> {
    tag_pattern()
        .captures_iter(value)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(2)?.as_str().to_ascii_lowercase();
            let kind = match (caps.get(1).is_some(), caps.get(4).is_some()) {
                (true, _) => TokenKind::Close,
                (false, true) => TokenKind::SelfClosing,
                (false, false) if VOID_TAGS.contains(&name.as_str()) => TokenKind::SelfClosing,
                (false, false) => TokenKind::Open,
            };
            Some(MarkupToken {
                kind,
                name,
                offset: whole.start(),
            })
        })
        .collect()
}

/// 只保留词汇表内的标记，`Array<string>` 这类尖括号文本不算占位标记
pub fn tokenize_known(value: &str, vocabulary: &[String]) -> Vec<MarkupToken> {
    tokenize(value)
        .into_iter()
        .filter(|t| vocabulary.contains(&t.name))
        .collect()
}

/// 检查开始标记与结束标记是否成对且正确嵌套
pub fn check_balance(value: &str) -> Result<(), MarkupError> {
    balance(tokenize(value))
}

/// 同 [`check_balance`]，但只考虑词汇表内的标记
pub fn check_balance_known(value: &str, vocabulary: &[String]) -> Result<(), MarkupError> {
    balance(tokenize_known(value, vocabulary))
}

fn balance(tokens: Vec<MarkupToken>) -> Result<(), MarkupError> {
    let mut stack: Vec<String> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Open => stack.push(token.name),
            TokenKind::SelfClosing => {}
            TokenKind::Close => match stack.pop() {
                Some(open) if open == token.name => {}
                Some(open) => {
                    return Err(MarkupError::Mismatched {
                        expected: open,
                        found: token.name,
                    })
                }
                None => return Err(MarkupError::UnexpectedClose { found: token.name }),
            },
        }
    }

    match stack.pop() {
        Some(open) => Err(MarkupError::Unclosed(open)),
        None => Ok(()),
    }
}

/// 文案使用的标记名（开始与自闭合标记，排序后保留重复）
pub fn tag_signature(value: &str) -> Vec<String> {
    signature(tokenize(value))
}

/// 同 [`tag_signature`]，但只考虑词汇表内的标记
pub fn tag_signature_known(value: &str, vocabulary: &[String]) -> Vec<String> {
    signature(tokenize_known(value, vocabulary))
}

fn signature(tokens: Vec<MarkupToken>) -> Vec<String> {
    let mut names: Vec<String> = tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Close)
        .map(|t| t.name)
        .collect();
    names.sort();
    names
}

/// 默认允许的占位标记词汇
pub fn default_vocabulary() -> Vec<String> {
    ["a", "bold", "br", "code", "js", "so", "strong"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("TypeScript 是 <bold>带有类型语法的 JavaScript。</bold>")]
    #[case("在 <so>Stack Overflow 2020 开发者调查</so> 中被评为<strong>第二受欢迎的编程语言</strong>")]
    #[case("来自<a href='https://www.npmjs.com/search?q=keywords:playground-plugin'>npm</a> 的第三方 Plugins")]
    #[case("在 JavaScript 文件中没有编辑器警告。<br/><br/>这在运行时会崩溃。")]
    #[case("<strong>外层 <code>内层</code></strong>")]
    #[case("没有任何标记")]
    fn balanced_values_pass(#[case] value: &str) {
        assert_eq!(check_balance(value), Ok(()));
    }

    #[rstest]
    #[case("<strong>未闭合", MarkupError::Unclosed("strong".into()))]
    #[case("多余的</bold>", MarkupError::UnexpectedClose { found: "bold".into() })]
    #[case(
        "<strong>交错<code></strong></code>",
        MarkupError::Mismatched { expected: "code".into(), found: "strong".into() }
    )]
    fn unbalanced_values_fail(#[case] value: &str, #[case] expected: MarkupError) {
        assert_eq!(check_balance(value), Err(expected));
    }

    #[test]
    fn link_attributes_with_slashes_are_not_self_closing() {
        let tokens = tokenize("<a href='/dev/playground-plugins/' title='链接'>这里</a>");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Open);
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[1].kind, TokenKind::Close);
    }

    #[test]
    fn bare_br_counts_as_void() {
        assert_eq!(check_balance("一行<br>两行"), Ok(()));
        assert_eq!(tokenize("<br>")[0].kind, TokenKind::SelfClosing);
    }

    #[test]
    fn comparison_operators_are_not_tags() {
        assert!(tokenize("if (a < b && b > 1) {}").is_empty());
    }

    #[test]
    fn generics_outside_vocabulary_do_not_count_as_markup() {
        let vocabulary = default_vocabulary();
        let value = "Array<string> 与 <strong>Map<K, V></strong>";
        assert!(check_balance(value).is_err());
        assert_eq!(check_balance_known(value, &vocabulary), Ok(()));
        assert_eq!(tag_signature_known(value, &vocabulary), vec!["strong"]);
    }

    #[test]
    fn signature_ignores_order_and_closing_tags() {
        assert_eq!(
            tag_signature("<so>a</so> <strong>b</strong>"),
            tag_signature("<strong>b</strong> <so>a</so>")
        );
        assert_eq!(tag_signature("x<br/>y<br/>"), vec!["br", "br"]);
    }
}
