//! DOT string escaping.

/// Escapes text for use inside a double-quoted DOT string.
///
/// Backslashes and double quotes are backslash-escaped, line feeds become the `\n` label
/// escape and carriage returns are dropped. Everything else, including non-ASCII term
/// names, passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use ontograph::utils::escape_dot;
///
/// assert_eq!(escape_dot("say \"apoptosis\""), "say \\\"apoptosis\\\"");
/// assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
/// ```
#[must_use]
pub fn escape_dot(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_dot("cell death"), "cell death");
        assert_eq!(escape_dot("GO:0008219"), "GO:0008219");
        assert_eq!(escape_dot(""), "");
    }

    #[test]
    fn test_quotes_and_backslashes() {
        assert_eq!(escape_dot("a\"b"), "a\\\"b");
        assert_eq!(escape_dot("path\\to"), "path\\\\to");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(escape_dot("one\ntwo"), "one\\ntwo");
        assert_eq!(escape_dot("one\r\ntwo"), "one\\ntwo");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_dot("α-helix <fold>"), "α-helix <fold>");
    }
}
