//! HTTP provider client
//!
//! Endpoints are resolved through a [`ProviderTable`]; every call is bounded by
//! the client-wide timeout configured at construction.

use super::{Category, FetchOutcome, NumberSource, ProviderTable};
use crate::error::SourceError;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpNumberSource {
    client: reqwest::Client,
    providers: ProviderTable,
}

impl HttpNumberSource {
    pub fn new(providers: ProviderTable, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, providers })
    }

    async fn request(&self, category: Category) -> Result<Vec<i64>, SourceError> {
        let url = self.providers.url(category);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        category.format().decode(&body)
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, category: Category) -> FetchOutcome {
        match self.request(category).await {
            Ok(numbers) => {
                log::debug!("Fetched {} numbers from {} provider", numbers.len(), category);
                FetchOutcome::Fetched(numbers)
            }
            Err(error) => {
                log::warn!(
                    "Error fetching numbers from {}: {}",
                    self.providers.url(category),
                    error
                );
                FetchOutcome::Failed { category, error }
            }
        }
    }
}
