//! CGI query string decoding.

use std::collections::BTreeMap;

/// Decoded request parameters, built once from the query string before any
/// line processing starts and looked up (never mutated) afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestParams {
    params: BTreeMap<String, String>,
}

impl RequestParams {
    /// Parse an `k1=v1&k2=v2&...` query string.
    ///
    /// Each `&`-separated segment is percent-decoded (`+` as space) and then
    /// split at its first `=`; a segment without `=` yields an empty value.
    /// Decoding never fails: an invalid hex digit after `%` counts as 0, a
    /// truncated escape is padded with 0. Empty segments are skipped and the
    /// last occurrence of a duplicated name wins.
    pub fn parse(query: &str) -> Self {
        let mut params = BTreeMap::new();
        for segment in query.split('&') {
            if segment.is_empty() {
                continue;
            }
            let decoded = decode_segment(segment);
            match decoded.find('=') {
                Some(idx) => {
                    let value = decoded[idx + 1..].to_string();
                    let mut key = decoded;
                    key.truncate(idx);
                    params.insert(key, value);
                }
                None => {
                    params.insert(decoded, String::new());
                }
            }
        }
        RequestParams { params }
    }

    /// Exact lookup of one decoded parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().map_or(0, hex_value);
                let lo = bytes.get(i + 2).copied().map_or(0, hex_value);
                out.push(hi << 4 | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_and_percent_escapes() {
        let params = RequestParams::parse("a=1&b=hello+world&c=%3Cx%3E");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("hello world"));
        assert_eq!(params.get("c"), Some("<x>"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn missing_name_is_a_miss() {
        let params = RequestParams::parse("a=1");
        assert_eq!(params.get("b"), None);
    }

    #[test]
    fn segment_without_equals_has_empty_value() {
        let params = RequestParams::parse("flag&a=1");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let params = RequestParams::parse("a=1&&b=2&");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert!(RequestParams::parse("").is_empty());
    }

    #[test]
    fn invalid_hex_digits_decode_as_zero() {
        let params = RequestParams::parse("a=%zq");
        assert_eq!(params.get("a"), Some("\0"));
        // One bad digit still contributes its good neighbor.
        let params = RequestParams::parse("a=%4z");
        assert_eq!(params.get("a"), Some("@"));
    }

    #[test]
    fn truncated_escape_is_padded_with_zero() {
        let params = RequestParams::parse("a=%4");
        assert_eq!(params.get("a"), Some("@"));
        let params = RequestParams::parse("a=%");
        assert_eq!(params.get("a"), Some("\0"));
    }

    #[test]
    fn encoded_equals_participates_in_the_split() {
        // The segment is decoded before the key/value split.
        let params = RequestParams::parse("a%3Db=c");
        assert_eq!(params.get("a"), Some("b=c"));
    }

    #[test]
    fn last_duplicate_wins() {
        let params = RequestParams::parse("a=1&a=2");
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn keys_are_percent_decoded_too() {
        let params = RequestParams::parse("my+key=v");
        assert_eq!(params.get("my key"), Some("v"));
    }
}
