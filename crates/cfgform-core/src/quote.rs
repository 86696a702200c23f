//! Shell-style quoting for config file values.
//!
//! This is deliberately not a full shell grammar: one outer quote pair, one
//! backslash pass, nothing nested. Unbalanced quotes pass through untouched.

/// Remove one outer quote pair and resolve backslash escapes.
///
/// The outer pair is stripped only when the value starts and ends with the
/// same quote character (`'` or `"`) and is at least two characters long.
/// A backslash consumes the following character literally; a trailing
/// backslash is dropped.
pub fn shell_unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    let inner = if bytes.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Quote `value` for a `key=value` config line if it needs it.
///
/// Values containing whitespace, a backslash, a quote character, or one of
/// `&<>` are wrapped in single quotes with embedded `\`, `'`, `"` escaped;
/// anything else is returned unchanged. `shell_unquote` of the result always
/// yields the original value.
pub fn shell_quote(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() * 2 + 2);
    out.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\\' | '\'' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

fn needs_quoting(value: &str) -> bool {
    value
        .chars()
        .any(|ch| ch.is_whitespace() || matches!(ch, '\\' | '\'' | '"' | '&' | '<' | '>'))
}
