//! Adapter for the remote bitcoin-prices REST endpoint.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::feed::{FeedError, PriceFeed};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{FeedConfig, NewPriceRecord, PriceRecord, RetryConfig};

/// POST body for the write endpoint: the coerced record plus the
/// client-generated identifier the server stores alongside it.
#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "ChangePercentFromLastMonth")]
    change_percent: f64,
    #[serde(rename = "Volume")]
    volume: &'a str,
    id: &'a str,
}

/// [`PriceFeed`] implementation over the history REST endpoint.
///
/// Reads are single-shot. Writes run under [`RetryConfig::write_default`]
/// unless overridden: the identifier is generated once, so a retried
/// attempt re-sends the same row instead of creating a sibling.
#[derive(Clone)]
pub struct HistoryApiFeed {
    config: FeedConfig,
    http: Arc<dyn HttpClient>,
    write_retry: RetryConfig,
    timeout_ms: u64,
}

impl HistoryApiFeed {
    pub fn new(config: FeedConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: FeedConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http,
            write_retry: RetryConfig::write_default(),
            timeout_ms: 3_000,
        }
    }

    pub fn with_write_retry(mut self, write_retry: RetryConfig) -> Self {
        self.write_retry = write_retry;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn auth(&self) -> HttpAuth {
        HttpAuth::BearerToken(self.config.api_token().to_owned())
    }

    async fn get_history(&self) -> Result<Vec<PriceRecord>, FeedError> {
        let request = HttpRequest::get(self.config.history_url())
            .with_header("accept", "application/json")
            .with_auth(&self.auth())
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FeedError::unavailable(format!("history fetch failed: {e}")))?;

        if !response.is_success() {
            return Err(FeedError::unavailable(format!(
                "history endpoint returned status {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| FeedError::parse(format!("malformed history payload: {e}")))
    }

    async fn post_record(&self, record: NewPriceRecord) -> Result<PriceRecord, FeedError> {
        // One identifier for the whole retry loop: a retried attempt
        // re-sends the same row rather than minting a sibling.
        let id = uuid::Uuid::new_v4().to_string();
        let payload = SubmitPayload {
            date: &record.date,
            price: record.price,
            open: record.open,
            high: record.high,
            change_percent: record.change_percent,
            volume: &record.volume,
            id: &id,
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| FeedError::internal(format!("failed to encode record: {e}")))?;

        let mut last_error = FeedError::internal("write never attempted");

        for attempt in 0..self.write_retry.max_attempts {
            match self.try_post(&body).await {
                Ok(stored) => return Ok(stored),
                Err(error) => {
                    debug!(attempt = attempt + 1, %error, "write attempt failed");
                    let exhausted = attempt + 1 >= self.write_retry.max_attempts;
                    let give_up = exhausted || !error.retryable();
                    last_error = error;
                    if give_up {
                        break;
                    }
                    tokio::time::sleep(self.write_retry.delay_for_attempt(attempt)).await;
                }
            }
        }

        warn!(%last_error, "write retries exhausted");
        Err(last_error)
    }

    async fn try_post(&self, body: &str) -> Result<PriceRecord, FeedError> {
        let request = HttpRequest::post(self.config.history_url())
            .with_json_body(body)
            .with_auth(&self.auth())
            .with_timeout_ms(self.timeout_ms);

        let response = self.http.execute(request).await.map_err(|e| {
            FeedError::unavailable(format!("write failed: {e}")).with_retryable(e.retryable())
        })?;

        if !response.is_success() {
            return Err(FeedError::unavailable(format!(
                "write endpoint returned status {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| FeedError::parse(format!("malformed stored record: {e}")))
    }
}

impl PriceFeed for HistoryApiFeed {
    fn fetch_history<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, FeedError>> + Send + 'a>> {
        Box::pin(self.get_history())
    }

    fn submit<'a>(
        &'a self,
        record: NewPriceRecord,
    ) -> Pin<Box<dyn Future<Output = Result<PriceRecord, FeedError>> + Send + 'a>> {
        Box::pin(self.post_record(record))
    }
}
