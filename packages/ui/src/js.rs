//! Escaping for values interpolated into `document::eval` snippets.

/// Escape a string for inclusion inside a double-quoted JS string literal.
pub(crate) fn js_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(js_escape(r#"a"b\c"#), r#"a\"b\\c"#);
    }

    #[test]
    fn escapes_script_closing_angle() {
        assert_eq!(js_escape("</script>"), "\\x3c/script>");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(js_escape("DRIFT20"), "DRIFT20");
    }
}
