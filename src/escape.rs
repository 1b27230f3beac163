// escape.rs
//
// XML entity escaping for operand payloads.

const ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
];

/// Replace the characters XML reserves with their entities.
///
/// `&` is replaced first so ampersands introduced by later replacements are
/// never escaped a second time.
pub fn escape_entities(value: &str) -> String {
    let mut out = value.to_string();
    for (ch, entity) in ENTITIES {
        if out.contains(*ch) {
            out = out.replace(*ch, entity);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_entities("hello\\032world"), "hello\\032world");
    }

    #[test]
    fn test_all_reserved_characters() {
        assert_eq!(
            escape_entities("a&b\"c'd<e>f"),
            "a&amp;b&quot;c&apos;d&lt;e&gt;f"
        );
    }

    #[test]
    fn test_ampersand_not_double_escaped() {
        assert_eq!(escape_entities("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_entities("&lt;"), "&amp;lt;");
    }
}
