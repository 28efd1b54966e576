//! Human-friendly date and time strings.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;

/// The four renderings of a moment used in prompts and file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeStrings {
    /// "February 10, 2025"
    pub date: String,
    /// "1:15pm"
    pub time: String,
    /// "2025-02-10 1:15:33pm"
    pub datetime: String,
    /// "2025-02-10_13-15-33"
    pub datetime_for_filename: String,
}

impl DateTimeStrings {
    /// Renders the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Renders `dt` in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let (is_pm, hour12) = dt.hour12();
        let meridiem = if is_pm { "pm" } else { "am" };

        Self {
            date: format!("{} {}, {}", dt.format("%B"), dt.day(), dt.year()),
            time: format!("{hour12}:{:02}{meridiem}", dt.minute()),
            datetime: format!(
                "{} {hour12}:{:02}:{:02}{meridiem}",
                dt.format("%Y-%m-%d"),
                dt.minute(),
                dt.second()
            ),
            datetime_for_filename: dt.format("%Y-%m-%d_%H-%M-%S").to_string(),
        }
    }
}
