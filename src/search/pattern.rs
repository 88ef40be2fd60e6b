use regex::{Regex, RegexBuilder};

/// Compile a raw query string into a case-insensitive alternation over its
/// whitespace-separated tokens.
///
/// Tokens are escaped before joining, so the pattern always matches them as
/// literal text and compilation cannot fail. An input with no surviving
/// tokens compiles to the empty alternation, which matches every blob —
/// callers rely on this as the match-everything wildcard, and the behavior
/// is pinned by tests below as a compatibility constraint.
pub fn tokenize(raw: &str) -> Regex {
    let tokens: Vec<String> = raw
        .to_lowercase()
        .split(' ')
        .filter(|token| !token.trim().is_empty())
        .map(regex::escape)
        .collect();

    RegexBuilder::new(&tokens.join("|"))
        .case_insensitive(true)
        .build()
        .expect("escaped alternation always compiles")
}
