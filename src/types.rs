//! Core types for wordproxy

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single candidate word as returned by the word-lookup API.
///
/// `score` keeps the upstream number as-is, so integer scores are written
/// back as integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordResult {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Number>,
    #[serde(
        rename = "numSyllables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub num_syllables: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl WordResult {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            score: None,
            num_syllables: None,
            tags: None,
        }
    }

    pub fn with_syllables(mut self, num_syllables: u32) -> Self {
        self.num_syllables = Some(num_syllables);
        self
    }

    pub fn with_score(mut self, score: impl Into<Number>) -> Self {
        self.score = Some(score.into());
        self
    }

    /// Syllable count used for ordering; absent counts sort as zero
    pub fn syllables(&self) -> u32 {
        self.num_syllables.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let raw = r#"{"word":"rapid","score":1200,"numSyllables":2,"tags":["adj"],"defs":["quick"]}"#;
        let word: WordResult = serde_json::from_str(raw).unwrap();

        assert_eq!(word.word, "rapid");
        assert_eq!(word.score, Some(Number::from(1200)));
        assert_eq!(word.num_syllables, Some(2));
        assert_eq!(word.tags.as_deref(), Some(&["adj".to_string()][..]));
    }

    #[test]
    fn test_absent_fields_are_omitted_on_encode() {
        let encoded = serde_json::to_string(&WordResult::new("cat").with_syllables(1)).unwrap();
        assert_eq!(encoded, r#"{"word":"cat","numSyllables":1}"#);
    }

    #[test]
    fn test_scores_are_written_back_unchanged() {
        let raw = r#"[{"word":"rapid","score":1200,"numSyllables":2},{"word":"fleet","score":12.5}]"#;
        let words: Vec<WordResult> = serde_json::from_str(raw).unwrap();

        let encoded = serde_json::to_string(&words).unwrap();
        assert_eq!(encoded, raw);
    }

    #[test]
    fn test_missing_word_is_rejected() {
        let result = serde_json::from_str::<WordResult>(r#"{"numSyllables":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_syllables_count_as_zero() {
        assert_eq!(WordResult::new("x").syllables(), 0);
    }
}
