//! Session date stamp.
//!
//! The session records the local calendar date it started on, formatted
//! `YYYY-MM-DD`. `chrono` reads the local clock on the host and, through its
//! `wasmbind` feature, in the browser.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// `strftime` pattern of the session date.
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of `at` in its own time zone.
pub fn format_session_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(SESSION_DATE_FORMAT).to_string()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    format_session_date(&Local::now())
}
