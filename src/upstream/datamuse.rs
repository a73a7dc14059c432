//! Datamuse API client

use std::time::Duration;

use async_trait::async_trait;

use super::WordSource;
use crate::query::SearchQuery;
use crate::types::WordResult;
use crate::Result;

/// Default endpoint; `md=s` asks for syllable counts
pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com/words?md=s&";

/// HTTP client for the Datamuse `/words` endpoint
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatamuseClient {
    /// Create a client against `base_url`; each call is bounded by `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WordSource for DatamuseClient {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<WordResult>> {
        let url = query.upstream_url(&self.base_url);
        tracing::debug!(%url, "Querying word-lookup API");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let words: Vec<WordResult> = serde_json::from_slice(&body)?;
        tracing::debug!(count = words.len(), "Word-lookup API responded");

        Ok(words)
    }
}
