//! The feed contract: everything the pipeline needs from networking.
//!
//! A [`PriceFeed`] reads the full history and appends one record. Nothing
//! else crosses this seam; HTTP mechanics live behind it in the adapter.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{NewPriceRecord, PriceRecord};

/// Feed-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// Transport failure or a non-2xx response.
    Unavailable,
    /// The caller handed over something the endpoint cannot accept.
    InvalidRequest,
    /// The endpoint answered with a body we cannot make sense of.
    Parse,
    Internal,
}

/// Structured feed error surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
    retryable: bool,
}

impl FeedError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Parse,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    /// Override the retryability the constructor assumed, e.g. for a
    /// transport error that already knows it cannot be retried.
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::Unavailable => "feed.unavailable",
            FeedErrorKind::InvalidRequest => "feed.invalid_request",
            FeedErrorKind::Parse => "feed.parse",
            FeedErrorKind::Internal => "feed.internal",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

/// Read/append contract for the price history endpoint.
///
/// Reads are single-shot: a failure surfaces to the caller, who decides
/// whether to ask again. Writes retry internally per the adapter's
/// [`RetryConfig`](crate::RetryConfig) and surface only the final error.
pub trait PriceFeed: Send + Sync {
    /// Fetch every stored price record.
    fn fetch_history<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, FeedError>> + Send + 'a>>;

    /// Append one record, returning the stored row (with the identifier
    /// the store attached).
    fn submit<'a>(
        &'a self,
        record: NewPriceRecord,
    ) -> Pin<Box<dyn Future<Output = Result<PriceRecord, FeedError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(FeedError::unavailable("x").code(), "feed.unavailable");
        assert_eq!(FeedError::parse("x").code(), "feed.parse");
    }

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(FeedError::unavailable("x").retryable());
        assert!(!FeedError::invalid_request("x").retryable());
        assert!(!FeedError::parse("x").retryable());
        assert!(!FeedError::internal("x").retryable());
    }
}
