use crate::ledger::period::{CalendarDate, Month, Period};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Common view over normalized entries: the derived period key, the
/// day-of-month ordinal and the amount. Everything the period filters and
/// aggregators need, independent of the entry kind.
pub trait LedgerEntry {
    fn period(&self) -> Period;
    fn day(&self) -> u8;
    fn amount(&self) -> Decimal;
}

/// An income record enriched with its derived period fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeEntry {
    pub id: Uuid,
    pub source: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub date: CalendarDate,
    pub year: i32,
    pub month: Month,
}

impl IncomeEntry {
    pub fn normalize(id: Uuid, source: String, category: Option<String>, amount: Decimal, date: CalendarDate) -> Self {
        Self {
            id,
            source,
            category,
            amount,
            year: date.year,
            month: date.month,
            date,
        }
    }
}

impl LedgerEntry for IncomeEntry {
    fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    fn day(&self) -> u8 {
        self.date.day
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// An expense record enriched with its derived period fields. The `title`
/// aliases the stored description for list and report display.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEntry {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub amount: Decimal,
    pub date: CalendarDate,
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

impl ExpenseEntry {
    pub fn normalize(id: Uuid, description: String, category: String, amount: Decimal, date: CalendarDate) -> Self {
        Self {
            id,
            title: description,
            category,
            amount,
            year: date.year,
            month: date.month,
            day: date.day,
            date,
        }
    }
}

impl LedgerEntry for ExpenseEntry {
    fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Whether a debt entry records money borrowed or money lent out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtKind {
    Borrowing,
    Lending,
}

/// A borrowing or lending enriched with its derived period fields.
///
/// The entry's period comes from the borrow/lend date. `due_day` is a
/// display-only derivation; overdue detection always goes through the full
/// `due_date`, which may fall in a different month than the entry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtEntry {
    pub id: Uuid,
    pub kind: DebtKind,
    pub name: String,
    pub amount: Decimal,
    pub date: CalendarDate,
    pub due_date: CalendarDate,
    pub settled: bool,
    pub year: i32,
    pub month: Month,
    pub day: u8,
    pub due_day: u8,
}

impl DebtEntry {
    pub fn normalize(id: Uuid, kind: DebtKind, name: String, amount: Decimal, date: CalendarDate, due_date: CalendarDate, settled: bool) -> Self {
        Self {
            id,
            kind,
            name,
            amount,
            year: date.year,
            month: date.month,
            day: date.day,
            due_day: due_date.day,
            date,
            due_date,
            settled,
        }
    }
}

impl LedgerEntry for DebtEntry {
    fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn income_derives_period_from_income_date() {
        let date = CalendarDate::parse("2025-02-01").unwrap();
        let entry = IncomeEntry::normalize(Uuid::new_v4(), "Salary".into(), Some("Job".into()), dec!(1000), date);
        assert_eq!(entry.year, 2025);
        assert_eq!(entry.month, Month::February);
        assert_eq!(entry.period(), date.period());
    }

    #[test]
    fn expense_aliases_title_and_keeps_day() {
        let date = CalendarDate::parse("2025-03-15").unwrap();
        let entry = ExpenseEntry::normalize(Uuid::new_v4(), "Groceries".into(), "Food".into(), dec!(42.50), date);
        assert_eq!(entry.title, "Groceries");
        assert_eq!(entry.day, 15);
        assert_eq!(entry.month, Month::March);
    }

    #[test]
    fn debt_due_day_comes_from_due_date_not_entry_date() {
        let date = CalendarDate::parse("2025-01-31").unwrap();
        let due = CalendarDate::parse("2025-02-05").unwrap();
        let entry = DebtEntry::normalize(Uuid::new_v4(), DebtKind::Borrowing, "Alice".into(), dec!(200), date, due, false);
        assert_eq!(entry.month, Month::January);
        assert_eq!(entry.day, 31);
        assert_eq!(entry.due_day, 5);
        assert_eq!(entry.due_date, due);
    }

    #[test]
    fn normalization_tolerates_due_date_before_entry_date() {
        let date = CalendarDate::parse("2025-03-10").unwrap();
        let due = CalendarDate::parse("2025-03-01").unwrap();
        let entry = DebtEntry::normalize(Uuid::new_v4(), DebtKind::Lending, "Bob".into(), dec!(75), date, due, false);
        assert!(entry.due_date < entry.date);
    }
}
