//! Shared utility functions.

/// HTML-escape a string into the output buffer.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. Input that is already escaped gets
/// escaped again, so callers must apply this exactly once.
pub fn escape_html_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// HTML-escapes a string for safe embedding in markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_html_into(&mut out, s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_special_chars() {
        assert_eq!(
            escape_html("<script>alert(\"hi&bye\")</script>"),
            "&lt;script&gt;alert(&quot;hi&amp;bye&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_passthrough_normal() {
        assert_eq!(escape_html("Hello World 123"), "Hello World 123");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_is_not_idempotent() {
        let once = escape_html("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(escape_html(&once), "a &amp;amp; b");
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("geïnformeerd “Versturen”"), "geïnformeerd “Versturen”");
    }
}
