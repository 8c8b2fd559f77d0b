use thiserror::Error;

/// Validation and contract errors exposed by `chaintick-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date string is empty")]
    EmptyDate,
    #[error("unrecognized date format: '{value}'")]
    UnrecognizedDate { value: String },
    #[error("date '{value}' is not a valid calendar date")]
    InvalidCalendarDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("api token is missing; set CHAINTICK_API_TOKEN")]
    MissingApiToken,
}
