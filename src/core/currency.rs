//! Currency conversion abstractions

use crate::core::error::RateError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub type Result<T> = std::result::Result<T, RateError>;

/// Source of exchange rates between two currency codes.
///
/// Codes are case-insensitive. A successful lookup always yields a positive,
/// finite number of `to` units per one unit of `from`.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    /// Shown in front of the amount prompt, e.g. `R$`.
    pub symbol: String,
}

impl Currency {
    pub fn new(code: &str, name: &str, symbol: &str) -> Self {
        Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

pub fn default_currencies() -> Vec<Currency> {
    vec![
        Currency::new("USD", "US Dollar", "$"),
        Currency::new("EUR", "Euro", "€"),
        Currency::new("GBP", "Pound Sterling", "£"),
        Currency::new("JPY", "Japanese Yen", "¥"),
        Currency::new("BRL", "Brazilian Real", "R$"),
    ]
}

pub fn find_currency<'a>(currencies: &'a [Currency], code: &str) -> Option<&'a Currency> {
    let code = code.trim();
    currencies.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
