//! ISO-8601 local date-time handling (no offset), e.g. `2024-01-01T09:30:00`.

use chrono::{Local, NaiveDateTime};

use crate::errors::ModelError;

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Parse a client-supplied local date-time. Seconds and fractional seconds are
/// optional; anything else, including a trailing offset, is rejected.
pub fn parse_local(field: &str, value: &str) -> Result<NaiveDateTime, ModelError> {
    NaiveDateTime::parse_from_str(value, WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, WITHOUT_SECONDS))
        .map_err(|e| ModelError::Validation(format!("invalid {field} '{value}': {e}")))
}

/// Server-side creation time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}
