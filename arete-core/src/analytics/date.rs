//! Canonical date formatting, parsing, and window generation.
//!
//! Every date that crosses a component boundary is a `YYYY-MM-DD` string
//! keyed on the local calendar day. [`chrono::NaiveDate`] carries exactly
//! those local year/month/day fields with no timezone attached, so
//! formatting and parsing here can never shift a date across midnight
//! the way a UTC-based serialization would.
//!
//! "Today" is never read ambiently inside a computation: callers capture
//! it once (see [`today`]) and pass it down, so a computation cannot
//! observe a day boundary crossing mid-calculation and tests can pin any
//! reference date they like.

use crate::error::{Error, Result};
use chrono::{Days, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string back into a calendar date.
///
/// Strict inverse of [`format_date`]. Malformed input is surfaced as
/// [`Error::Date`] so the producer of the bad string can be diagnosed;
/// it is never coerced through a lenient parser.
pub fn parse_date_str(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::Date {
        input: s.to_string(),
        message: e.to_string(),
    })
}

/// The current local calendar date.
///
/// Capture this once per computation and pass it as the reference date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The `n` consecutive calendar dates ending at `today` inclusive,
/// oldest first.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(i as u64)))
        .collect()
}
