/// Character-level Unicode classification for mixed Chinese/Latin text.

pub fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
}

/// ASCII letters and digits embedded in the input are preserved verbatim,
/// never phoneticized.
pub fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Unicode punctuation, covering both ASCII and the CJK/full-width blocks
/// that show up in Chinese text.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || ('\u{2000}'..='\u{206F}').contains(&c) // general punctuation
        || ('\u{3000}'..='\u{303F}').contains(&c) // CJK symbols and punctuation
        || ('\u{FE30}'..='\u{FE4F}').contains(&c) // vertical forms
        || ('\u{FE50}'..='\u{FE6F}').contains(&c) // small form variants
        || ('\u{FF01}'..='\u{FF0F}').contains(&c) // full-width ! to /
        || ('\u{FF1A}'..='\u{FF20}').contains(&c) // full-width : to @
        || ('\u{FF3B}'..='\u{FF40}').contains(&c) // full-width [ to `
        || ('\u{FF5B}'..='\u{FF65}').contains(&c) // full-width { to halfwidth corner bracket
}

/// Literal pass-through class for the segmentation pipeline: whitespace or
/// punctuation.
pub fn is_literal(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_classification() {
        assert!(is_han('我'));
        assert!(is_han('漢'));
        assert!(!is_han('a'));
        assert!(!is_han('シ'));
        assert!(!is_han('。'));
    }

    #[test]
    fn test_ascii_word() {
        assert!(is_ascii_word('a'));
        assert!(is_ascii_word('Z'));
        assert!(is_ascii_word('7'));
        assert!(!is_ascii_word('!'));
        assert!(!is_ascii_word('我'));
    }

    #[test]
    fn test_punctuation_classes() {
        for c in ['.', ',', '!', '?', '。', '，', '！', '？', '「', '」', '、', '…', '：'] {
            assert!(is_punctuation(c), "{c}");
        }
        assert!(!is_punctuation('我'));
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation(' '));
    }

    #[test]
    fn test_literal_includes_whitespace() {
        assert!(is_literal(' '));
        assert!(is_literal('\n'));
        assert!(is_literal('　'));
        assert!(is_literal('。'));
        assert!(!is_literal('我'));
    }
}
