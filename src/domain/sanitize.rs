//! Sanitization for untrusted text headed to storage.
//!
//! The order is fixed: strip markup first, escape second. Escaping first
//! would turn `&lt;` back into something a later strip pass could read as a
//! tag. Escaping leaves existing entities alone, so running the transform
//! over already-sanitized text changes nothing.

/// Strip markup tags, then HTML-escape what remains.
pub fn sanitize(input: &str) -> String {
    escape(&strip_tags(input))
}

/// Drop everything between `<` and its closing `>`. An unterminated `<`
/// swallows the rest of the string, same as PHP's `strip_tags`.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escape `& < > " '`, skipping `&` that already starts an entity.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, c) in input.char_indices() {
        match c {
            '&' if starts_entity(&input[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// True if `s` (which begins with `&`) opens a complete named or numeric
/// character entity.
fn starts_entity(s: &str) -> bool {
    let rest = &s[1..];
    let Some(end) = rest.find(';') else {
        return false;
    };
    // Longest named entity is well under this
    if end == 0 || end > 31 {
        return false;
    }
    let body = &rest[..end];
    if let Some(num) = body.strip_prefix('#') {
        if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            return !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit());
        }
        return !num.is_empty() && num.bytes().all(|b| b.is_ascii_digit());
    }
    body.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
        && body.bytes().all(|b| b.is_ascii_alphanumeric())
}
