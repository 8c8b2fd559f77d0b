use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{Date, Month, OffsetDateTime};

use crate::ValidationError;

/// Calendar day with no time-of-day component.
///
/// The price history endpoint spells the same day two ways, `MM/DD/YYYY`
/// and `YYYY-MM-DD`, and never settles on one. `CalendarDay` is the
/// comparable form both spellings normalize to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(Date);

impl CalendarDay {
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let month = Month::try_from(month).map_err(|_| ValidationError::InvalidCalendarDate {
            value: format!("{year:04}-{month:02}-{day:02}"),
        })?;
        let date = Date::from_calendar_date(year, month, day).map_err(|_| {
            ValidationError::InvalidCalendarDate {
                value: format!("{year:04}-{:02}-{day:02}", month as u8),
            }
        })?;
        Ok(Self(date))
    }

    /// Parse a date string into a calendar day.
    ///
    /// Accepted forms, tried in order:
    ///
    /// 1. An RFC3339 instant, truncated to its calendar date. Any
    ///    time-of-day component is discarded so later comparisons happen
    ///    at whole-day granularity.
    /// 2. A `-`-separated string read as `YEAR-MONTH-DAY` (1-indexed month).
    /// 3. A `/`-separated string read as `MONTH/DAY/YEAR` (1-indexed month).
    ///
    /// Anything else is an error naming the offending input. The empty
    /// string is an error, never a default.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyDate);
        }

        if let Ok(instant) = OffsetDateTime::parse(value, &Rfc3339) {
            return Ok(Self(instant.date()));
        }

        if value.contains('-') {
            let [year, month, day] = split_numeric_segments(value, '-')?;
            return Self::from_ymd(year as i32, clamp_u8(month, value)?, clamp_u8(day, value)?)
                .map_err(|_| ValidationError::InvalidCalendarDate {
                    value: value.to_owned(),
                });
        }

        if value.contains('/') {
            let [month, day, year] = split_numeric_segments(value, '/')?;
            return Self::from_ymd(year as i32, clamp_u8(month, value)?, clamp_u8(day, value)?)
                .map_err(|_| ValidationError::InvalidCalendarDate {
                    value: value.to_owned(),
                });
        }

        Err(ValidationError::UnrecognizedDate {
            value: value.to_owned(),
        })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    /// `YYYY-MM-DD`.
    pub fn format_iso(self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month() as u8,
            self.0.day()
        )
    }

    /// `MM/DD/YYYY`, the form the original data set mostly uses.
    pub fn format_us(self) -> String {
        format!(
            "{:02}/{:02}/{:04}",
            self.0.month() as u8,
            self.0.day(),
            self.0.year()
        )
    }
}

impl From<Date> for CalendarDay {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Display for CalendarDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

fn split_numeric_segments(value: &str, separator: char) -> Result<[i64; 3], ValidationError> {
    let mut segments = [0_i64; 3];
    let mut count = 0;

    for part in value.split(separator) {
        if count == 3 {
            return Err(ValidationError::UnrecognizedDate {
                value: value.to_owned(),
            });
        }
        segments[count] = part
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::UnrecognizedDate {
                value: value.to_owned(),
            })?;
        count += 1;
    }

    if count != 3 {
        return Err(ValidationError::UnrecognizedDate {
            value: value.to_owned(),
        });
    }

    Ok(segments)
}

fn clamp_u8(segment: i64, value: &str) -> Result<u8, ValidationError> {
    u8::try_from(segment).map_err(|_| ValidationError::InvalidCalendarDate {
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings_to_the_same_day() {
        let slash = CalendarDay::parse("01/05/2024").expect("must parse");
        let hyphen = CalendarDay::parse("2024-01-05").expect("must parse");
        assert_eq!(slash, hyphen);
    }

    #[test]
    fn truncates_rfc3339_instants_to_their_date() {
        let parsed = CalendarDay::parse("2024-03-09T23:59:59Z").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-03-09");
    }

    #[test]
    fn rejects_the_empty_string() {
        let err = CalendarDay::parse("").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyDate));
    }

    #[test]
    fn rejects_separator_free_garbage() {
        let err = CalendarDay::parse("yesterday").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnrecognizedDate { .. }));
    }

    #[test]
    fn rejects_out_of_range_components() {
        let err = CalendarDay::parse("2024-13-01").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidCalendarDate { .. }));

        let err = CalendarDay::parse("02/30/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidCalendarDate { .. }));
    }

    #[test]
    fn orders_across_spellings() {
        let earlier = CalendarDay::parse("2024-01-03").expect("must parse");
        let later = CalendarDay::parse("01/10/2024").expect("must parse");
        assert!(earlier < later);
    }

    #[test]
    fn formats_round_trip() {
        let day = CalendarDay::from_ymd(2024, 1, 5).expect("valid day");
        assert_eq!(day.format_iso(), "2024-01-05");
        assert_eq!(day.format_us(), "01/05/2024");
        assert_eq!(CalendarDay::parse(&day.format_us()).expect("parses"), day);
    }
}
