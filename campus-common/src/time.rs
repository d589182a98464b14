//! Calendar date utilities
//!
//! Dates arrive from the calendar form as `yyyy-M-d` (month and day may be
//! one or two digits, so `yyyy-M-dd` input is accepted) and are stored as ISO
//! `YYYY-MM-DD` text. Display uses the long English form, e.g.
//! `Friday, October 14, 1983`.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Format accepted from the `/set-date` form; chrono reads one- or two-digit month and day
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long display format: weekday, month name, unpadded day, year
pub const HUGE_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Parse a date submitted by the calendar form
pub fn parse_form_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Format a date for storage in the `dates` table
pub fn to_sql_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date the way the calendar page shows it
pub fn format_huge(date: NaiveDate) -> String {
    date.format(HUGE_DATE_FORMAT).to_string()
}
