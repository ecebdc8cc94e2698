//! Backslash-escape decoding for string and char literals.

/// Decode the escapes in a literal body (quotes already stripped).
///
/// `\t` expands to four spaces rather than a tab, `\n` becomes a line feed,
/// and any other escaped character stands for itself.  A lone trailing `\` is
/// dropped.
pub fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push_str("    "),
            Some('n') => out.push('\n'),
            Some(c) => out.push(c),
            None => {}
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(decode_escapes("hello world"), "hello world");
        assert_eq!(decode_escapes(""), "");
    }

    #[test]
    fn tab_is_four_spaces() {
        assert_eq!(decode_escapes("a\\tb"), "a    b");
    }

    #[test]
    fn newline() {
        assert_eq!(decode_escapes("a\\nb"), "a\nb");
    }

    #[test]
    fn escaped_backslash_and_quote() {
        assert_eq!(decode_escapes("a\\\\b"), "a\\b");
        assert_eq!(decode_escapes("say \\\"hi\\\""), "say \"hi\"");
    }

    #[test]
    fn unknown_escape_drops_backslash() {
        assert_eq!(decode_escapes("\\r\\q"), "rq");
    }

    #[test]
    fn trailing_backslash_dropped() {
        assert_eq!(decode_escapes("trailing\\"), "trailing");
        assert_eq!(decode_escapes("\\"), "");
    }

    #[test]
    fn multibyte_passthrough() {
        assert_eq!(decode_escapes("caf\\u00e9 ✓"), "cafu00e9 ✓");
    }
}
