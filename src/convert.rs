//! Segmentation pipeline: walks input text and routes every unit either
//! through the phoneticization path (dictionary lookup → parse → kana) or
//! straight into the output as a preserved logograph or literal.

use tracing::debug_span;

use crate::dict::Romanization;
use crate::jyutping::parse;
use crate::kana::map_outcome;
use crate::unicode;

/// One atomic unit of the output stream, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Preserved span: a preserve-list match (carrying its computed
    /// reading), an embedded ASCII word, or a literal
    /// whitespace/punctuation character.
    Logograph {
        text: String,
        reading: Option<String>,
    },
    /// Phoneticized character with its kana rendering and the
    /// romanization it came from.
    Phonetic {
        source: String,
        kana: String,
        romanization: String,
    },
}

impl Segment {
    /// The segment's slice of the original input, ignoring annotations.
    pub fn literal(&self) -> &str {
        match self {
            Segment::Logograph { text, .. } => text,
            Segment::Phonetic { source, .. } => source,
        }
    }
}

/// The three parallel output streams plus the ordered segment list.
/// Created fresh per conversion call; no state is shared across calls.
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    /// Converted text: kana for phoneticized spans, preserved logographs
    /// kept with their reading attached as a pronunciation annotation.
    pub display: String,
    /// Flat phonetic transcription.
    pub phonetic: String,
    /// Flat romanized transcription, tokens separated by spaces.
    pub romanized: String,
    pub segments: Vec<Segment>,
}

/// Per-character phoneticization: dictionary lookup with identity
/// fallback, then parse + map. Unknown characters and unparseable
/// readings echo through unchanged.
struct Phoneticized {
    kana: String,
    romanization: String,
}

fn phoneticize(dict: &dyn Romanization, ch: char) -> Phoneticized {
    let token = match dict.lookup(ch) {
        Some(reading) => reading.to_string(),
        None => ch.to_string(),
    };
    let kana = map_outcome(&token, &parse(&token));
    Phoneticized {
        kana,
        romanization: token,
    }
}

/// Compute the informational reading for a preserved span: kana
/// concatenated, romanizations space-joined.
fn span_reading(dict: &dyn Romanization, span: &[char]) -> (String, Vec<String>) {
    let mut kana = String::new();
    let mut tokens = Vec::with_capacity(span.len());
    for result in dict
        .lookup_many(span)
        .into_iter()
        .zip(span)
        .map(|(hit, &ch)| match hit {
            Some(reading) => reading.to_string(),
            None => ch.to_string(),
        })
    {
        kana.push_str(&map_outcome(&result, &parse(&result)));
        tokens.push(result);
    }
    (kana, tokens)
}

/// Append a romanized token, inserting a separating space between
/// adjacent tokens. Literal whitespace and punctuation already separate,
/// so no space is added after them.
fn push_token(out: &mut String, token: &str) {
    if let Some(last) = out.chars().last() {
        if !last.is_whitespace() && !unicode::is_punctuation(last) {
            out.push(' ');
        }
    }
    out.push_str(token);
}

/// Run the segmentation pipeline over `text`.
///
/// `preserve` must already be normalized (deduplicated, sorted by
/// descending length); see [`crate::preserve::normalize_terms`]. Matching
/// is greedy longest-prefix and is not re-validated against punctuation
/// boundaries: a preserve term straddling punctuation is still emitted as
/// one logograph block.
pub fn convert_with(
    dict: &dyn Romanization,
    preserve: &[String],
    text: &str,
) -> ConversionResult {
    let _span = debug_span!("convert_with", chars = text.chars().count()).entered();

    let chars: Vec<char> = text.chars().collect();
    let terms: Vec<Vec<char>> = preserve.iter().map(|t| t.chars().collect()).collect();

    let mut result = ConversionResult::default();
    let mut i = 0;

    while i < chars.len() {
        // (a) longest preserve-list prefix match
        if let Some(term) = terms.iter().find(|t| chars[i..].starts_with(t.as_slice())) {
            let span_text: String = term.iter().collect();
            let (reading, tokens) = span_reading(dict, term);

            result.display.push_str(&span_text);
            result.display.push('（');
            result.display.push_str(&reading);
            result.display.push('）');
            result.phonetic.push_str(&reading);
            for token in &tokens {
                push_token(&mut result.romanized, token);
            }
            result.segments.push(Segment::Logograph {
                text: span_text,
                reading: Some(reading),
            });
            i += term.len();
            continue;
        }

        let ch = chars[i];

        // (b) embedded ASCII word, preserved verbatim as one span
        if unicode::is_ascii_word(ch) {
            let start = i;
            while i < chars.len() && unicode::is_ascii_word(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            result.display.push_str(&word);
            result.phonetic.push_str(&word);
            push_token(&mut result.romanized, &word);
            result.segments.push(Segment::Logograph {
                text: word,
                reading: None,
            });
            continue;
        }

        // (c) whitespace and punctuation pass into all three streams
        if unicode::is_literal(ch) {
            result.display.push(ch);
            result.phonetic.push(ch);
            result.romanized.push(ch);
            result.segments.push(Segment::Logograph {
                text: ch.to_string(),
                reading: None,
            });
            i += 1;
            continue;
        }

        // (d) phoneticize through lookup → parse → map
        let p = phoneticize(dict, ch);
        result.display.push_str(&p.kana);
        result.phonetic.push_str(&p.kana);
        push_token(&mut result.romanized, &p.romanization);
        result.segments.push(Segment::Phonetic {
            source: ch.to_string(),
            kana: p.kana,
            romanization: p.romanization,
        });
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::builtin::seed;
    use crate::preserve::normalize_terms;

    fn run(preserve: &[&str], text: &str) -> ConversionResult {
        let dict = seed();
        let terms = normalize_terms(preserve.iter().map(|s| s.to_string()).collect());
        convert_with(&dict, &terms, text)
    }

    fn literals(result: &ConversionResult) -> String {
        result.segments.iter().map(Segment::literal).collect()
    }

    #[test]
    fn test_fully_phoneticized() {
        let result = run(&[], "我食飯");
        assert_eq!(result.phonetic, "オシッファーン");
        assert_eq!(result.display, "オシッファーン");
        assert_eq!(result.romanized, "ngo5 sik6 faan6");
        assert_eq!(result.segments.len(), 3);
    }

    #[test]
    fn test_embedded_ascii_preserved() {
        let result = run(&[], "我 love 你");
        let expected = [
            Segment::Phonetic {
                source: "我".into(),
                kana: "オ".into(),
                romanization: "ngo5".into(),
            },
            Segment::Logograph {
                text: " ".into(),
                reading: None,
            },
            Segment::Logograph {
                text: "love".into(),
                reading: None,
            },
            Segment::Logograph {
                text: " ".into(),
                reading: None,
            },
            Segment::Phonetic {
                source: "你".into(),
                kana: "ネイ".into(),
                romanization: "nei5".into(),
            },
        ];
        assert_eq!(result.segments, expected);
        assert_eq!(result.phonetic, "オ love ネイ");
        assert_eq!(result.romanized, "ngo5 love nei5");
    }

    #[test]
    fn test_longest_preserve_match_wins() {
        let result = run(&["屋", "屋企"], "屋企好");
        match &result.segments[0] {
            Segment::Logograph { text, reading } => {
                assert_eq!(text, "屋企");
                assert_eq!(reading.as_deref(), Some("ウッケイ"));
            }
            other => panic!("expected logograph, got {other:?}"),
        }
        assert_eq!(result.display, "屋企（ウッケイ）ホウ");
        assert_eq!(result.phonetic, "ウッケイホウ");
        assert_eq!(result.romanized, "uk1 kei5 hou2");
    }

    #[test]
    fn test_preserve_ordering_is_idempotent() {
        let a = run(&["屋", "屋企", "我哋"], "我哋返屋企");
        let b = run(&["我哋", "屋企", "屋"], "我哋返屋企");
        assert_eq!(a.segments, b.segments);
        assert_eq!(a.display, b.display);
    }

    #[test]
    fn test_punctuation_passes_through() {
        let result = run(&[], "食飯，食麵。");
        assert_eq!(result.phonetic, "シッファーン，シッミン。");
        assert_eq!(result.romanized, "sik6 faan6，sik6 min6。");
    }

    #[test]
    fn test_preserve_may_straddle_punctuation() {
        // Accepted behavior: a preserve span crossing a punctuation
        // boundary still comes out as one logograph block.
        let result = run(&["飯，食"], "食飯，食麵");
        assert_eq!(
            result.segments[1].literal(),
            "飯，食",
            "segments: {:?}",
            result.segments
        );
    }

    #[test]
    fn test_round_trip_reconstruction() {
        for text in ["我食飯", "我 love 你!", "屋企，好。", "ABC123"] {
            let result = run(&["屋企"], text);
            assert_eq!(literals(&result), text);
        }
    }

    #[test]
    fn test_unknown_character_identity_fallback() {
        let result = run(&[], "鑫");
        assert_eq!(
            result.segments[0],
            Segment::Phonetic {
                source: "鑫".into(),
                kana: "鑫".into(),
                romanization: "鑫".into(),
            }
        );
        assert_eq!(result.phonetic, "鑫");
    }

    #[test]
    fn test_empty_input() {
        let result = run(&[], "");
        assert!(result.segments.is_empty());
        assert!(result.display.is_empty());
    }

    #[test]
    fn test_preserved_span_with_unknown_char_reading() {
        // Reading is informational; unknown chars inside a span echo
        // through via the identity fallback.
        let result = run(&["鑫我"], "鑫我");
        match &result.segments[0] {
            Segment::Logograph { reading, .. } => {
                assert_eq!(reading.as_deref(), Some("鑫オ"));
            }
            other => panic!("expected logograph, got {other:?}"),
        }
        assert_eq!(result.romanized, "鑫 ngo5");
    }
}
