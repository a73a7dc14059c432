//! Upstream word-lookup abstraction
//!
//! Provides a single interface over the word-lookup service so handlers can
//! be exercised without the network.

use async_trait::async_trait;

use crate::query::SearchQuery;
use crate::types::WordResult;
use crate::Result;

pub mod datamuse;

pub use datamuse::DatamuseClient;

/// Word-lookup backend trait
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch candidate words for a query, in upstream order
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<WordResult>>;
}
