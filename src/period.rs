//! Calendar arithmetic for the reporting window.
//!
//! The job always reports on the calendar month immediately following the
//! run date, so this is the only date maths the binary needs.

use chrono::{Datelike, NaiveDate};

/// The calendar month the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPeriod {
    /// 1-based month number.
    pub month: u32,
    pub year: i32,
}

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl TargetPeriod {
    /// The month immediately following `date`, rolling the year over at
    /// December.
    pub fn following(date: NaiveDate) -> Self {
        if date.month() == 12 {
            TargetPeriod {
                month: 1,
                year: date.year() + 1,
            }
        } else {
            TargetPeriod {
                month: date.month() + 1,
                year: date.year(),
            }
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }

    /// A short human-readable label, e.g. `Dec 2025`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_ABBREVS[(self.month - 1) as usize], self.year)
    }
}

/// Parse a roster date cell in `M/D/YY` form, e.g. `12/5/25`.
pub fn parse_ride_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%m/%d/%y")
}
