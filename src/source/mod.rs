//! Number Source Gateway
//!
//! Maps a [`Category`] to a remote provider, bounds the call with a timeout and
//! normalizes the provider's payload into a flat sequence of integers.
//!
//! A fetch never fails the request. The gateway reports the distinction between
//! "fetched N numbers" and "fetch failed" through [`FetchOutcome`], and the
//! caller decides to degrade a failure into an empty contribution.
//!
//! ## Providers
//!
//! | id | category  | encoding            |
//! |----|-----------|---------------------|
//! | p  | prime     | JSON array          |
//! | f  | fibonacci | JSON array          |
//! | e  | even      | newline-delimited   |
//! | r  | random    | newline-delimited   |

pub mod category;
pub mod decoder;
pub mod http;

pub use category::{Category, ProviderTable};
pub use decoder::ProviderFormat;
pub use http::HttpNumberSource;

use crate::error::SourceError;
use async_trait::async_trait;

/// Result of a single provider call
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Vec<i64>),
    Failed {
        category: Category,
        error: SourceError,
    },
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }

    /// Numbers contributed to the merge; a failed fetch contributes none.
    pub fn into_numbers(self) -> Vec<i64> {
        match self {
            FetchOutcome::Fetched(numbers) => numbers,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Anything able to produce a batch of numbers for a category
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, category: Category) -> FetchOutcome;
}
