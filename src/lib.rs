//! Wordproxy - a word-search proxy that orders results by syllable count
//!
//! Queries are forwarded to the Datamuse word-lookup API in one of two
//! modes (means-like or synonym). Results come back sorted by syllable
//! count, fewest first, then alphabetically.

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod server;
pub mod types;
pub mod upstream;

pub use error::{Error, Result};
