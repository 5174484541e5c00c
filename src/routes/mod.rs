use crate::error::app_error::AppError;
use crate::ledger::entry::LedgerEntry;
use crate::ledger::filter::{filter_by_period, filter_by_year};
use crate::ledger::period::{Month, Period};

pub mod borrowing;
pub mod error;
pub mod expense;
pub mod health;
pub mod income;
pub mod lending;
pub mod reports;
pub mod summary;
pub mod user;

/// Optional period scoping shared by the four list endpoints.
pub(crate) enum PeriodFilter {
    All,
    Year(i32),
    Period(Period),
}

impl PeriodFilter {
    /// A month name is only meaningful together with a year; a month on
    /// its own would silently match the same month of every year.
    pub(crate) fn from_query(year: Option<i32>, month: Option<String>) -> Result<Self, AppError> {
        match (year, month) {
            (None, None) => Ok(Self::All),
            (Some(year), None) => Ok(Self::Year(year)),
            (Some(year), Some(month)) => Ok(Self::Period(Period::new(year, Month::from_name(&month)?))),
            (None, Some(_)) => Err(AppError::BadRequest("month filter requires a year".to_string())),
        }
    }

    pub(crate) fn apply<E: LedgerEntry + Clone>(&self, entries: &[E]) -> Vec<E> {
        match self {
            Self::All => entries.to_vec(),
            Self::Year(year) => filter_by_year(entries, *year),
            Self::Period(period) => filter_by_period(entries, *period),
        }
    }
}
