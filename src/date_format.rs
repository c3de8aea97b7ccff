//! Date and time conversions for the sportsdata.io wire formats.
//!
//! The API uses two idiosyncratic representations:
//! - dates embedded in URL paths are `yyyy-MMM-dd` with an uppercased English
//!   month abbreviation (e.g. `2020-FEB-08`);
//! - JSON timestamps are naive local date-times reported in US Eastern time,
//!   with no zone offset attached.
//!
//! Everything timezone-sensitive in the crate lives here.

use chrono::{DateTime, MappedLocalTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::America::New_York;

use crate::error::ApiError;

/// Formats a calendar date for use as a path parameter in sportsdata.io
/// endpoints.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sportsdata_cbb::date_format::to_date_path_param;
///
/// let date = NaiveDate::from_ymd_opt(2020, 2, 8).unwrap();
/// assert_eq!(to_date_path_param(date), "2020-FEB-08");
/// ```
pub fn to_date_path_param(date: NaiveDate) -> String {
    // %b is a fixed English month abbreviation table, no locale involved
    date.format("%Y-%b-%d").to_string().to_uppercase()
}

/// Interprets a naive timestamp as wall-clock US Eastern time (the API's fixed
/// reporting zone) and resolves it to UTC, applying that zone's DST rules.
///
/// An ambiguous local time (the repeated fall-back hour) resolves to the
/// earlier offset. A nonexistent local time (the spring-forward gap) is an
/// error: the API should never report one.
pub fn eastern_to_utc(local: NaiveDateTime) -> Result<DateTime<Utc>, ApiError> {
    match New_York.from_local_datetime(&local) {
        MappedLocalTime::Single(dt) => Ok(dt.with_timezone(&Utc)),
        MappedLocalTime::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        MappedLocalTime::None => Err(ApiError::datetime_parse_error(format!(
            "local time {local} does not exist in the US Eastern zone"
        ))),
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields whose wire form is a naive
/// US Eastern timestamp string, e.g. `"2020-02-08T14:00:00"`.
pub(crate) mod eastern_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use chrono_tz::America::New_York;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => {
                let naive = NaiveDateTime::parse_from_str(&raw, WIRE_FORMAT).map_err(|e| {
                    D::Error::custom(format!("invalid local timestamp {raw:?}: {e}"))
                })?;
                super::eastern_to_utc(naive)
                    .map(Some)
                    .map_err(D::Error::custom)
            }
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(instant) => {
                let local = instant.with_timezone(&New_York).naive_local();
                serializer.serialize_str(&local.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
        }
    }
}

/// Serde adapter for `Option<NaiveDate>` fields. The API emits date-only
/// values either as `"2020-01-09"` or as a midnight timestamp
/// `"2020-01-09T00:00:00"`; both decode to the calendar date.
pub(crate) mod flexible_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
                        .map(|timestamp| timestamp.date())
                })
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid date {raw:?}: {e}"))),
        }
    }

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        }
    }
}
