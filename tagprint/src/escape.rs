//! Escaping of text children before they are embedded in markup.

use std::borrow::Cow;

/// Signature of a text escaper.
pub type EscapeFn = fn(&str) -> Cow<'_, str>;

/// Replace `<` and `>` with their entity forms.
///
/// Only angle brackets are touched; the output is meant for reading and
/// diffing, not for a browser. Borrows when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_escapes_angle_brackets() {
        assert_eq!(escape_html("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn test_leaves_other_characters() {
        assert_eq!(escape_html("a & \"b\" 'c'"), "a & \"b\" 'c'");
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }
}
