use crate::error::app_error::AppError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar months, keyed throughout the application by their canonical
/// English names. Serialization accepts and produces only those twelve
/// names, which rules out the free-text month typos the period filters
/// would otherwise silently miss.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Looks up a month by its canonical name. Matching is exact: the
    /// period filters compare names verbatim, so anything else is an error
    /// rather than an empty result.
    pub fn from_name(name: &str) -> Result<Month, AppError> {
        Month::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| AppError::invalid_input(format!("unrecognized month name '{}'", name)))
    }

    /// Zero-based position in the calendar year (January = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Month, AppError> {
        Month::ALL
            .get(index)
            .copied()
            .ok_or_else(|| AppError::invalid_input(format!("month index {} out of range", index)))
    }

    /// One-based month-of-year number (January = 1).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Result<Month, AppError> {
        if number == 0 {
            return Err(AppError::invalid_input("month number 0 out of range"));
        }
        Month::from_index(number as usize - 1).map_err(|_| AppError::invalid_input(format!("month number {} out of range", number)))
    }

    pub fn days_in(self, year: i32) -> u8 {
        match self {
            Month::January | Month::March | Month::May | Month::July | Month::August | Month::October | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A `(year, month)` grouping and filtering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.month)
    }
}

/// A calendar date with no time-of-day component.
///
/// The triple is parsed and formatted by components only. Going through a
/// timestamp would let the host timezone shift a stored `2025-02-01` into
/// January 31 or February 2, so no constructor here ever touches a clock
/// or an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, AppError> {
        if day == 0 || day > month.days_in(year) {
            return Err(AppError::invalid_input(format!("day {} out of range for {} {}", day, month, year)));
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from a bare day-of-month ordinal, clamping an
    /// oversized day to the month's last day. A day of 31 in February
    /// resolves to February 28/29 and never rolls over into March, which
    /// would corrupt the month the date is attributed to.
    pub fn clamped(year: i32, month: Month, day: u8) -> Self {
        let day = day.clamp(1, month.days_in(year));
        Self { year, month, day }
    }

    /// Parses the canonical `YYYY-MM-DD` wire format by components.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let bad = || AppError::invalid_input(format!("unparsable calendar date '{}'", value));

        let mut parts = value.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) if y.len() == 4 && m.len() == 2 && d.len() == 2 => (y, m, d),
            _ => return Err(bad()),
        };

        if !year.chars().chain(month.chars()).chain(day.chars()).all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }

        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;
        let day: u8 = day.parse().map_err(|_| bad())?;

        let month = Month::from_number(month).map_err(|_| bad())?;
        Self::new(year, month, day).map_err(|_| bad())
    }

    /// Zero-padded `YYYY-MM-DD`, the only form handed back to persistence
    /// and to clients.
    pub fn format_iso(&self) -> String {
        self.to_string()
    }

    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    fn to_naive(self) -> NaiveDate {
        // Constructors validated the components, so this cannot be out of range.
        NaiveDate::from_ymd_opt(self.year, self.month.number(), self.day as u32).expect("validated calendar date components")
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month.number(), self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        let month = Month::from_number(date.month()).expect("chrono month is always 1..=12");
        Self {
            year: date.year(),
            month,
            day: date.day() as u8,
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.to_naive()
    }
}
