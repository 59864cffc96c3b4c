use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::currency::{CurrencyRateProvider, Result};
use crate::core::error::RateError;
use crate::providers::rate_document::RateDocument;

/// One currency-api style endpoint serving `{base_url}/{code}.json`.
pub struct CurrencyApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        CurrencyApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn document_url(&self, origin: &str) -> String {
        format!("{}/{}.json", self.base_url, origin.to_lowercase())
    }

    /// Fetches the rate table for `origin`.
    pub async fn fetch_document(&self, origin: &str) -> Result<RateDocument> {
        let url = self.document_url(origin);
        debug!("Requesting rate document from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RateError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::HttpStatus { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RateError::Network {
                url: url.clone(),
                source,
            })?;

        let document = RateDocument::from_slice(&body)?;
        debug!(date = ?document.date(), "Received rate document");
        Ok(document)
    }
}

#[async_trait]
impl CurrencyRateProvider for CurrencyApiProvider {
    #[instrument(name = "CurrencyApiRate", skip(self), fields(endpoint = %self.base_url))]
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let document = self.fetch_document(from).await?;
        document.rate(from, to)
    }
}
