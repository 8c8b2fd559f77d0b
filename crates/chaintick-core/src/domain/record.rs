use serde::{Deserialize, Serialize};

use crate::{CalendarDay, ValidationError};

/// One historical Bitcoin price observation, in the wire shape of the
/// history endpoint (PascalCase field names).
///
/// `date` is the identity field: favorites and list identity key on it.
/// The string is kept verbatim because the endpoint never settles on one
/// spelling; use [`PriceRecord::day`] whenever two records must compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Open", default)]
    pub open: f64,
    #[serde(rename = "High", default)]
    pub high: f64,
    #[serde(rename = "ChangePercentFromLastMonth", default)]
    pub change_percent: f64,
    /// Free-text volume such as `"500.00K"`; never parsed numerically.
    #[serde(rename = "Volume", default = "default_volume")]
    pub volume: String,
    /// Server-assigned identifier. Carried as an opaque wire field;
    /// identity stays on `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl PriceRecord {
    /// Parse this record's date string into a comparable calendar day.
    pub fn day(&self) -> Result<CalendarDay, ValidationError> {
        CalendarDay::parse(&self.date)
    }

    /// Whether both records name the same calendar day, across spellings.
    /// Unparseable dates never match anything.
    pub fn same_day(&self, other: &Self) -> bool {
        matches!((self.day(), other.day()), (Ok(a), Ok(b)) if a == b)
    }
}

fn default_volume() -> String {
    String::from("0")
}

/// A user-submitted price observation, validated before it goes anywhere
/// near the write endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceRecord {
    pub date: String,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub change_percent: f64,
    pub volume: String,
}

impl NewPriceRecord {
    /// Price is required and must be finite; the remaining numerics
    /// default to `0.0` and volume to `"0"` when the caller has nothing
    /// better, mirroring how absent form fields are coerced.
    pub fn new(
        date: impl Into<String>,
        price: f64,
        open: Option<f64>,
        high: Option<f64>,
        change_percent: Option<f64>,
        volume: Option<String>,
    ) -> Result<Self, ValidationError> {
        let date = date.into();
        CalendarDay::parse(&date)?;

        validate_finite("price", price)?;
        let open = coerce("open", open)?;
        let high = coerce("high", high)?;
        let change_percent = coerce("change_percent", change_percent)?;

        Ok(Self {
            date,
            price,
            open,
            high,
            change_percent,
            volume: volume.unwrap_or_else(default_volume),
        })
    }
}

fn coerce(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        Some(value) => {
            validate_finite(field, value)?;
            Ok(value)
        }
        None => Ok(0.0),
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}
