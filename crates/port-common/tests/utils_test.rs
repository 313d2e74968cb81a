//! Tests for the shared escaping helpers.
//!
//! These tests cover:
//! - Markup characters never survive escaping
//! - Plain copy is left untouched

use port_common::utils::*;
use proptest::prelude::*;

#[test]
fn test_escape_html_scenarios() {
    assert_eq!(escape_html("<b>Hi</b>"), "&lt;b&gt;Hi&lt;/b&gt;");
    assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
}

#[test]
fn test_escape_html_into_appends() {
    let mut out = String::from("prefix: ");
    escape_html_into(&mut out, "<i>");
    assert_eq!(out, "prefix: &lt;i&gt;");
}

proptest! {
    #[test]
    fn test_property_escaped_output_has_no_markup(input in ".*") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        // Every ampersand left over starts an entity we produced.
        for (idx, _) in escaped.match_indices('&') {
            let rest = &escaped[idx..];
            prop_assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#39;")
            );
        }
    }

    #[test]
    fn test_property_plain_text_unchanged(input in "[a-zA-Z0-9 .,!?]*") {
        prop_assert_eq!(escape_html(&input), input);
    }
}
