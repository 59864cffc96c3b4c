//! Error classes for exchange rate lookups

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    /// Connection could not be established or the request timed out.
    #[error("Request error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} for {url}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Failed to decode rate document: {0}")]
    Decode(String),

    #[error("No exchange rate found for {origin} to {destination}")]
    MissingRate { origin: String, destination: String },

    #[error("Invalid exchange rate for {origin} to {destination}: {value}")]
    InvalidRate {
        origin: String,
        destination: String,
        value: String,
    },
}

impl RateError {
    pub(crate) fn missing(origin: &str, destination: &str) -> Self {
        RateError::MissingRate {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    pub(crate) fn invalid(origin: &str, destination: &str, value: impl ToString) -> Self {
        RateError::InvalidRate {
            origin: origin.to_string(),
            destination: destination.to_string(),
            value: value.to_string(),
        }
    }
}
