//! Scalar escaping for the block text format

/// Whether a plain scalar would be misread (or break the line) if left bare
///
/// Conservative: anything with an indicator character or surrounding
/// whitespace is quoted.
pub fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }

    let leading_indicator = s.starts_with(['-', '?', '%', '@', '`', '~']);
    let special = s.contains([
        ':', '#', '[', ']', '{', '}', ',', '&', '*', '!', '|', '>', '\'', '"', '\\',
    ]);

    leading_indicator || special || s.chars().any(char::is_control)
}

/// Wrap in double quotes, escaping backslash, quotes and control characters
pub fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
