//! Normalization of date/datetime-like values into points in time.
//!
//! Station exports carry timestamps in several shapes: bare dates, naive
//! datetimes, and offset-qualified datetimes, all of them either typed or as
//! text. [`resolve_timestamp`] reduces all of them to a single value in a
//! target IANA timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ProcessingError, Result};

/// Default target timezone for [`resolve_timestamp`].
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Text formats accepted for naive datetimes.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Text formats accepted for offset-qualified datetimes.
const AWARE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// A date or datetime-like value accepted by [`resolve_timestamp`].
#[derive(Debug, Clone)]
pub enum TimestampInput {
    /// A calendar date; resolved at midnight.
    Date(NaiveDate),
    /// A datetime without UTC-offset information.
    Naive(NaiveDateTime),
    /// A datetime with an attached UTC offset.
    Aware(DateTime<FixedOffset>),
    /// A textual representation of any of the above.
    Text(String),
}

impl From<NaiveDate> for TimestampInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Naive(datetime)
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::Aware(datetime)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::Aware(datetime.fixed_offset())
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A resolved point in time, either carrying the target timezone or bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTimestamp {
    /// Timezone-aware value in the requested zone.
    Aware(DateTime<Tz>),
    /// Wall-clock value with the offset stripped.
    Naive(NaiveDateTime),
}

impl ResolvedTimestamp {
    pub fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }

    /// The resolved instant in UTC. A naive value is read as UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Aware(datetime) => datetime.with_timezone(&Utc),
            Self::Naive(datetime) => Utc.from_utc_datetime(datetime),
        }
    }
}

impl std::fmt::Display for ResolvedTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aware(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%:z")),
            Self::Naive(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Intermediate parse result: either the input carried an offset or it didn't.
enum Parsed {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

/// Resolve a date/datetime-like value into a point in time in `timezone`.
///
/// A naive input is interpreted in the target zone (the wall clock is kept
/// and the zone's offset attached); an aware input is converted to the
/// target zone. When `timezone_aware` is false the offset is stripped after
/// conversion, so the result reads as the target zone's wall clock.
///
/// # Examples
/// ```
/// use stofs_processor::utils::resolve_timestamp;
///
/// let resolved = resolve_timestamp("2001-12-28", "Asia/Tehran", true).unwrap();
/// assert_eq!(resolved.to_string(), "2001-12-28 00:00:00+03:30");
/// ```
pub fn resolve_timestamp<T>(value: T, timezone: &str, timezone_aware: bool) -> Result<ResolvedTimestamp>
where
    T: Into<TimestampInput>,
{
    let tz: Tz = timezone
        .parse()
        .map_err(|_| ProcessingError::UnknownTimezone(timezone.to_string()))?;

    let localized = match normalize(value.into())? {
        // Earliest reading disambiguates wall-clock times that a DST
        // transition makes ambiguous; times inside a DST gap do not exist.
        Parsed::Naive(naive) => tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
            ProcessingError::TimestampParse(format!("{} does not exist in {}", naive, timezone))
        })?,
        Parsed::Aware(aware) => aware.with_timezone(&tz),
    };

    if timezone_aware {
        Ok(ResolvedTimestamp::Aware(localized))
    } else {
        Ok(ResolvedTimestamp::Naive(localized.naive_local()))
    }
}

fn normalize(input: TimestampInput) -> Result<Parsed> {
    match input {
        TimestampInput::Date(date) => Ok(Parsed::Naive(NaiveDateTime::new(date, NaiveTime::MIN))),
        TimestampInput::Naive(datetime) => Ok(Parsed::Naive(datetime)),
        TimestampInput::Aware(datetime) => Ok(Parsed::Aware(datetime)),
        TimestampInput::Text(text) => parse_text(&text),
    }
}

fn parse_text(text: &str) -> Result<Parsed> {
    let trimmed = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Parsed::Aware(datetime));
    }
    for format in AWARE_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(trimmed, format) {
            return Ok(Parsed::Aware(datetime));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Parsed::Naive(datetime));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Parsed::Naive(NaiveDateTime::new(date, NaiveTime::MIN)));
    }

    Err(ProcessingError::TimestampParse(text.to_string()))
}
