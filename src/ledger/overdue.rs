use crate::ledger::entry::DebtEntry;
use crate::ledger::period::CalendarDate;
use rust_decimal::Decimal;

/// Whether a borrowing or lending is past due, strictly before `today`.
///
/// The comparison uses the entry's full due date. A borrowing recorded on
/// January 31 can fall due on February 5, so reconstructing the due date
/// from the entry's own month and a bare day ordinal would misattribute
/// it by a month. The predicate is settlement-agnostic; callers exclude
/// settled entries for active views and keep them for historical reports.
pub fn is_overdue(entry: &DebtEntry, today: CalendarDate) -> bool {
    entry.due_date < today
}

/// Total amount across the entries `is_overdue` selects.
pub fn sum_overdue(entries: &[DebtEntry], today: CalendarDate) -> Decimal {
    entries.iter().filter(|e| is_overdue(e, today)).fold(Decimal::ZERO, |acc, e| acc + e.amount)
}
