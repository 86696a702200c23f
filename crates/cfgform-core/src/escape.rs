//! HTML entity encoding for form field values.

/// Encode `input` for use in HTML text or attribute content.
///
/// `<`, `>`, `&`, `"` and `'` become their named entity references;
/// everything else passes through unchanged.
pub fn html_encode(input: &str) -> String {
    let mut out = String::new();
    html_encode_into(&mut out, input);
    out
}

/// Encode into a caller-owned scratch buffer.
///
/// The buffer is overwritten, not appended to, and reserved up front for the
/// worst case (every character escaped, 6x input length).
pub fn html_encode_into(out: &mut String, input: &str) {
    out.clear();
    out.reserve(input.len() * 6);
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(html_encode("<"), "&lt;");
        assert_eq!(html_encode(">"), "&gt;");
        assert_eq!(html_encode("&"), "&amp;");
        assert_eq!(html_encode("\""), "&quot;");
        assert_eq!(html_encode("'"), "&apos;");
        assert_eq!(html_encode("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn specials_map_to_distinct_entities() {
        let encoded: Vec<String> = "<>&\"'".chars().map(|c| html_encode(&c.to_string())).collect();
        for (i, a) in encoded.iter().enumerate() {
            for b in &encoded[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(html_encode("hello world 123"), "hello world 123");
        assert_eq!(html_encode(""), "");
    }

    #[test]
    fn already_encoded_text_encodes_again() {
        // Not idempotent on entity text; the ampersand is escaped too.
        assert_eq!(html_encode("&lt;"), "&amp;lt;");
    }

    #[test]
    fn scratch_buffer_is_overwritten() {
        let mut buf = String::new();
        html_encode_into(&mut buf, "a<b");
        assert_eq!(buf, "a&lt;b");
        html_encode_into(&mut buf, "x");
        assert_eq!(buf, "x");
    }
}
