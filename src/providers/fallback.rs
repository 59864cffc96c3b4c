use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::core::currency::{CurrencyRateProvider, Result};

/// Asks `primary` first and `secondary` only once `primary` has failed.
///
/// The secondary's error is returned as is. The primary's error is logged
/// and then dropped.
pub struct FallbackRateProvider<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackRateProvider<P, S>
where
    P: CurrencyRateProvider,
    S: CurrencyRateProvider,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P, S> CurrencyRateProvider for FallbackRateProvider<P, S>
where
    P: CurrencyRateProvider,
    S: CurrencyRateProvider,
{
    #[instrument(name = "FallbackRate", skip(self))]
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        match self.primary.get_rate(from, to).await {
            Ok(rate) => {
                debug!(rate, "Primary source answered");
                Ok(rate)
            }
            Err(primary_err) => {
                warn!(error = %primary_err, "Primary rate source failed, trying secondary");
                self.secondary.get_rate(from, to).await.inspect_err(|e| {
                    warn!(error = %e, "Secondary rate source failed");
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_USER_AGENT;
    use crate::core::error::RateError;
    use crate::providers::currency_api::CurrencyApiProvider;
    use crate::providers::util::build_client;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct MockInnerProvider {
        rate: Option<f64>,
        call_count: AtomicUsize,
    }

    impl MockInnerProvider {
        fn answering(rate: f64) -> Self {
            Self {
                rate: Some(rate),
                call_count: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                rate: None,
                call_count: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CurrencyRateProvider for MockInnerProvider {
        async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.rate.ok_or_else(|| RateError::missing(from, to))
        }
    }

    fn api_provider(base_url: &str) -> CurrencyApiProvider {
        let client = build_client(DEFAULT_USER_AGENT, Duration::from_secs(5)).unwrap();
        CurrencyApiProvider::new(base_url, client)
    }

    async fn mount(server: &MockServer, template: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/usd.json"))
            .respond_with(template)
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn rates(eur: f64) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_string(format!(r#"{{"usd": {{"eur": {eur}}}}}"#))
    }

    #[tokio::test]
    async fn test_primary_takes_precedence() {
        let provider = FallbackRateProvider::new(
            MockInnerProvider::answering(0.92),
            MockInnerProvider::answering(0.95),
        );

        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.92);
        assert_eq!(provider.primary.calls(), 1);
        assert_eq!(provider.secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_secondary_used_after_primary_failure() {
        let provider = FallbackRateProvider::new(
            MockInnerProvider::failing(),
            MockInnerProvider::answering(0.95),
        );

        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.95);
        assert_eq!(provider.primary.calls(), 1);
        assert_eq!(provider.secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_both_sources_fail() {
        let provider = FallbackRateProvider::new(
            MockInnerProvider::failing(),
            MockInnerProvider::failing(),
        );

        let err = provider.get_rate("USD", "EUR").await.unwrap_err();
        assert!(matches!(err, RateError::MissingRate { .. }));
        assert_eq!(provider.primary.calls(), 1);
        assert_eq!(provider.secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_http_primary_wins_and_secondary_is_not_queried() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;
        mount(&primary, rates(0.92), 1).await;
        mount(&secondary, rates(0.95), 0).await;

        let provider = FallbackRateProvider::new(
            api_provider(&primary.uri()),
            api_provider(&secondary.uri()),
        );
        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.92);
    }

    #[tokio::test]
    async fn test_http_status_failure_falls_back() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;
        mount(&primary, ResponseTemplate::new(503), 1).await;
        mount(&secondary, rates(0.95), 1).await;

        let provider = FallbackRateProvider::new(
            api_provider(&primary.uri()),
            api_provider(&secondary.uri()),
        );
        assert_eq!(provider.get_rate("usd", "eur").await.unwrap(), 0.95);
    }

    #[tokio::test]
    async fn test_malformed_primary_falls_back() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;
        mount(&primary, ResponseTemplate::new(200).set_body_string("{not json"), 1).await;
        mount(&secondary, rates(0.95), 1).await;

        let provider = FallbackRateProvider::new(
            api_provider(&primary.uri()),
            api_provider(&secondary.uri()),
        );
        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.95);
    }

    #[tokio::test]
    async fn test_unreachable_primary_falls_back() {
        let secondary = MockServer::start().await;
        mount(&secondary, rates(0.95), 1).await;

        // Nothing listens on port 1
        let primary = api_provider("http://127.0.0.1:1");
        assert!(matches!(
            primary.get_rate("USD", "EUR").await,
            Err(RateError::Network { .. })
        ));

        let provider = FallbackRateProvider::new(primary, api_provider(&secondary.uri()));
        assert_eq!(provider.get_rate("USD", "EUR").await.unwrap(), 0.95);
    }

    #[tokio::test]
    async fn test_secondary_error_is_surfaced() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;
        mount(&primary, ResponseTemplate::new(200).set_body_string("[]"), 1).await;
        mount(&secondary, ResponseTemplate::new(404), 1).await;

        let provider = FallbackRateProvider::new(
            api_provider(&primary.uri()),
            api_provider(&secondary.uri()),
        );
        let err = provider.get_rate("USD", "EUR").await.unwrap_err();
        assert!(matches!(
            err,
            RateError::HttpStatus { status, .. } if status.as_u16() == 404
        ));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let primary = MockServer::start().await;
        let secondary = MockServer::start().await;
        mount(&primary, ResponseTemplate::new(500), 3).await;
        mount(&secondary, rates(0.95), 3).await;

        let provider = FallbackRateProvider::new(
            api_provider(&primary.uri()),
            api_provider(&secondary.uri()),
        );
        let mut results = Vec::new();
        for _ in 0..3 {
            results.push(provider.get_rate("USD", "EUR").await.unwrap());
        }
        assert_eq!(results, vec![0.95, 0.95, 0.95]);
    }
}
