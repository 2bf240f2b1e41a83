//! Preserve-term sources.
//!
//! The pipeline keeps externally nominated spans (pronouns, numerals,
//! proper nouns, foreign terms) as logographs instead of phoneticizing
//! them. Where the terms come from is a pluggable capability; the
//! pipeline only sees the normalized list.

use serde::Deserialize;
use tracing::warn;

/// Failure of an external preserve-term source. Never fatal to a
/// conversion: the caller degrades to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum PreserveError {
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("preserve source failure: {0}")]
    Source(String),
}

/// Supplies candidate logograph spans for one conversion request.
pub trait PreserveSource: Send + Sync {
    fn preserved_terms(&self, text: &str) -> Result<Vec<String>, PreserveError>;
}

/// Always-empty source: every character gets phoneticized.
pub struct NoPreserve;

impl PreserveSource for NoPreserve {
    fn preserved_terms(&self, _text: &str) -> Result<Vec<String>, PreserveError> {
        Ok(Vec::new())
    }
}

/// Caller-supplied fixed term list.
pub struct StaticTerms {
    terms: Vec<String>,
}

impl StaticTerms {
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl PreserveSource for StaticTerms {
    fn preserved_terms(&self, text: &str) -> Result<Vec<String>, PreserveError> {
        Ok(self
            .terms
            .iter()
            .filter(|t| text.contains(t.as_str()))
            .cloned()
            .collect())
    }
}

#[derive(Deserialize)]
struct LexiconFile {
    terms: Vec<String>,
}

/// Rule-based source backed by a term lexicon: returns every lexicon term
/// that occurs in the request text.
pub struct LexiconPreserve {
    terms: Vec<String>,
}

impl LexiconPreserve {
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a lexicon from its JSON form: `{"terms": ["我哋", ...]}`.
    pub fn from_json(text: &str) -> Result<Self, PreserveError> {
        let file: LexiconFile = serde_json::from_str(text)
            .map_err(|e| PreserveError::InvalidLexicon(e.to_string()))?;
        Ok(Self::new(file.terms))
    }

    /// Built-in lexicon of spans conventionally kept logographic:
    /// pronouns, numerals, and a few high-frequency compounds.
    pub fn default_lexicon() -> Self {
        Self::new([
            "我哋", "你哋", "佢哋", "人哋", "我", "你", "佢",
            "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
            "百", "千", "萬", "零",
            "香港", "廣東話", "屋企",
        ])
    }
}

impl PreserveSource for LexiconPreserve {
    fn preserved_terms(&self, text: &str) -> Result<Vec<String>, PreserveError> {
        Ok(self
            .terms
            .iter()
            .filter(|t| text.contains(t.as_str()))
            .cloned()
            .collect())
    }
}

/// Normalize a raw term list for matching: drop empties and duplicates,
/// sort by descending char length (ties lexicographic) so greedy matching
/// is longest-first and deterministic.
pub fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    let mut terms: Vec<String> = terms.into_iter().filter(|t| !t.is_empty()).collect();
    terms.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    terms.dedup();
    terms
}

/// Ask a source for terms, degrading to an empty list on failure.
pub fn terms_or_empty(source: &dyn PreserveSource, text: &str) -> Vec<String> {
    match source.preserved_terms(text) {
        Ok(terms) => normalize_terms(terms),
        Err(e) => {
            warn!(error = %e, "preserve source failed; converting fully phoneticized");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl PreserveSource for FailingSource {
        fn preserved_terms(&self, _text: &str) -> Result<Vec<String>, PreserveError> {
            Err(PreserveError::Source("tagger unreachable".into()))
        }
    }

    #[test]
    fn test_normalize_sorts_longest_first() {
        let terms = normalize_terms(vec!["屋".into(), "屋企".into(), "我".into()]);
        assert_eq!(terms, vec!["屋企", "屋", "我"]);
    }

    #[test]
    fn test_normalize_dedups_and_drops_empty() {
        let terms = normalize_terms(vec!["我".into(), "".into(), "我".into()]);
        assert_eq!(terms, vec!["我"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_terms(vec!["屋企".into(), "我哋".into(), "屋".into()]);
        let twice = normalize_terms(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_static_terms_filters_by_occurrence() {
        let source = StaticTerms::new(["屋企", "香港"]);
        let terms = source.preserved_terms("我返屋企").unwrap();
        assert_eq!(terms, vec!["屋企"]);
    }

    #[test]
    fn test_failure_degrades_to_empty() {
        assert!(terms_or_empty(&FailingSource, "我").is_empty());
    }

    #[test]
    fn test_lexicon_from_json() {
        let source = LexiconPreserve::from_json(r#"{"terms": ["香港", "我哋"]}"#).unwrap();
        let terms = source.preserved_terms("我哋去香港").unwrap();
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_lexicon_rejects_malformed_json() {
        assert!(matches!(
            LexiconPreserve::from_json("not json"),
            Err(PreserveError::InvalidLexicon(_))
        ));
    }
}
