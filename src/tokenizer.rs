// tokenizer.rs
//
// Line normalization: comment removal, trimming and whitespace collapsing.
// Each input line is normalized and split independently.

/// Characters treated as token separators. Matches the ASCII whitespace set,
/// including vertical tab, which `char::is_ascii_whitespace` leaves out.
pub fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

/// Normalize one raw source line.
///
/// Everything from the first `#` onward is a comment. No operand grammar
/// admits `#`, so the first one always starts the comment. The rest is
/// trimmed and every run of whitespace becomes a single space. An empty
/// result means the line carries nothing and should be skipped.
pub fn normalize_line(line: &str) -> String {
    let code = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let mut out = String::with_capacity(code.len());
    for word in code.split(is_separator).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split a normalized line into its tokens.
pub fn split_tokens(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split(' ').collect()
    }
}
