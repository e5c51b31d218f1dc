const LINE_SEPARATOR: char = '\u{2028}';
const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// Replaces U+2028 and U+2029 with `\n`. Existing `\n` and `\r` are kept as-is.
pub fn canonicalize_line_breaks(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            LINE_SEPARATOR | PARAGRAPH_SEPARATOR => '\n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_separators_become_line_feeds() {
        assert_eq!(canonicalize_line_breaks("a\u{2028}b\u{2029}c"), "a\nb\nc");
    }

    #[test]
    fn existing_breaks_are_untouched() {
        assert_eq!(canonicalize_line_breaks("a\r\nb\nc\r"), "a\r\nb\nc\r");
    }
}
