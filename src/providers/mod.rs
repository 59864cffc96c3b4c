pub mod currency_api;
pub mod fallback;
pub mod rate_document;
pub mod util;

use crate::core::config::AppConfig;
use anyhow::Result;
use currency_api::CurrencyApiProvider;
use fallback::FallbackRateProvider;

pub type DefaultRateProvider = FallbackRateProvider<CurrencyApiProvider, CurrencyApiProvider>;

/// Wires the primary and secondary endpoints from config into one provider.
pub fn rate_provider(config: &AppConfig) -> Result<DefaultRateProvider> {
    let client = util::build_client(&config.user_agent, config.timeout())?;
    Ok(FallbackRateProvider::new(
        CurrencyApiProvider::new(&config.endpoints.primary, client.clone()),
        CurrencyApiProvider::new(&config.endpoints.secondary, client),
    ))
}
