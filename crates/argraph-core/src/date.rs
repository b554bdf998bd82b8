//! OVA timestamp format

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{EdgeError, Result};

/// `DD/MM/YYYY - HH:MM:SS`. OVA timestamps carry no zone; they are read as UTC.
pub const OVA_DATE_FORMAT: &str = "%d/%m/%Y - %H:%M:%S";

/// chrono alone accepts single-digit fields, short years and loose spacing.
fn ova_date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4} - [0-9]{2}:[0-9]{2}:[0-9]{2}$")
            .expect("ova date regex must compile")
    })
}

pub fn parse_ova_date(text: &str) -> Result<DateTime<Utc>> {
    if !ova_date_shape().is_match(text) {
        return Err(EdgeError::malformed("date", format!("{text:?} is not DD/MM/YYYY - HH:MM:SS")));
    }
    NaiveDateTime::parse_from_str(text, OVA_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| EdgeError::malformed("date", format!("{text:?} does not match DD/MM/YYYY - HH:MM:SS: {e}")))
}

pub fn format_ova_date(date: &DateTime<Utc>) -> String {
    date.format(OVA_DATE_FORMAT).to_string()
}
