//! Feed credentials and presentation configuration.

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Default endpoint host; the token has no default and must be injected.
pub const DEFAULT_BASE_URL: &str = "https://sampleapis.assimilate.be";

const HISTORY_PATH: &str = "/bitcoin/historical_prices";

/// Connection settings for the history endpoint.
///
/// The bearer token is an injected credential: it comes from the caller
/// or the environment and is kept out of `Debug` output and logs.
#[derive(Clone, PartialEq, Eq)]
pub struct FeedConfig {
    base_url: String,
    api_token: String,
}

impl FeedConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl { value: base_url });
        }

        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(ValidationError::MissingApiToken);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_token,
        })
    }

    /// Read `CHAINTICK_API_TOKEN` (required) and `CHAINTICK_API_URL`
    /// (optional, defaults to [`DEFAULT_BASE_URL`]).
    pub fn from_env() -> Result<Self, ValidationError> {
        let base_url = std::env::var("CHAINTICK_API_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        let api_token =
            std::env::var("CHAINTICK_API_TOKEN").map_err(|_| ValidationError::MissingApiToken)?;
        Self::new(base_url, api_token)
    }

    pub fn history_url(&self) -> String {
        format!("{}{HISTORY_PATH}", self.base_url)
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl Debug for FeedConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Concrete presentation palette.
///
/// Exactly the recognized fields, in place of the loosely-typed theme
/// objects the original app passed around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub positive: String,
    pub negative: String,
    pub border: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: String::from("#ffffff"),
            text: String::from("#000000"),
            accent: String::from("#ff9500"),
            positive: String::from("#4caf50"),
            negative: String::from("#ff4444"),
            border: String::from("#cccccc"),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: String::from("#1a1a1a"),
            text: String::from("#ffffff"),
            accent: String::from("#ff9500"),
            positive: String::from("#4caf50"),
            negative: String::from("#ff4444"),
            border: String::from("#444444"),
        }
    }

    /// Color for a signed percentage: zero counts as positive.
    pub fn percent_color(&self, percent: f64) -> &str {
        if percent >= 0.0 {
            &self.positive
        } else {
            &self.negative
        }
    }
}
