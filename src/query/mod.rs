//! Search query model

use crate::{Error, Result};

pub mod ordering;

pub use ordering::{is_sorted, sort_results};

/// Upstream search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Words with a meaning similar to the term
    MeansLike,
    /// Synonyms of the term
    Synonym,
}

impl SearchMode {
    /// Query-string key selecting this mode upstream, including the `=`
    pub fn key(&self) -> &'static str {
        match self {
            SearchMode::MeansLike => "ml=",
            SearchMode::Synonym => "rel_syn=",
        }
    }
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub term: String,
}

impl SearchQuery {
    pub fn new(mode: SearchMode, term: impl Into<String>) -> Self {
        Self {
            mode,
            term: term.into(),
        }
    }

    /// Build a query from decoded query-string pairs.
    ///
    /// The first `search` value wins. Any `rel` key, whatever its value,
    /// selects synonym mode.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let term = pairs
            .iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value.as_str())
            .unwrap_or_default();

        if term.is_empty() {
            return Err(Error::invalid_request("search cannot be empty"));
        }

        let mode = if pairs.iter().any(|(key, _)| key == "rel") {
            SearchMode::Synonym
        } else {
            SearchMode::MeansLike
        };

        Ok(Self::new(mode, term))
    }

    /// Upstream URL: base endpoint, mode key and raw term, concatenated
    pub fn upstream_url(&self, base_url: &str) -> String {
        format!("{}{}{}", base_url, self.mode.key(), self.term)
    }
}
