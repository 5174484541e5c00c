use crate::ledger::aggregate::{available_balance, sum_amounts};
use crate::ledger::entry::{DebtEntry, ExpenseEntry, IncomeEntry, LedgerEntry};
use crate::ledger::filter::filter_by_period;
use crate::ledger::overdue::sum_overdue;
use crate::ledger::period::{CalendarDate, Period};
use rust_decimal::Decimal;
use serde::Serialize;

/// The fixed shape consumed by the dashboard cards, charts and exporters.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
    pub overdue_borrowed: Decimal,
    pub overdue_lent: Decimal,
    pub available_balance: Decimal,
}

/// One accumulated expense category for the breakdown chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Composes the period totals, overdue sums and balance in one pass.
///
/// The four totals cover the selected period; the overdue sums cover every
/// unsettled entry regardless of period, since a debt stays overdue until
/// it is settled. `today` is sampled once by the caller so a single report
/// sees one consistent cutoff.
pub fn build_dashboard(
    incomes: &[IncomeEntry],
    expenses: &[ExpenseEntry],
    borrowings: &[DebtEntry],
    lendings: &[DebtEntry],
    period: Period,
    today: CalendarDate,
) -> DashboardTotals {
    let total_income = sum_amounts(&filter_by_period(incomes, period));
    let total_expense = sum_amounts(&filter_by_period(expenses, period));
    let total_borrowed = sum_amounts(&filter_by_period(borrowings, period));
    let total_lent = sum_amounts(&filter_by_period(lendings, period));

    let unsettled = |entries: &[DebtEntry]| -> Vec<DebtEntry> { entries.iter().filter(|e| !e.settled).cloned().collect() };
    let overdue_borrowed = sum_overdue(&unsettled(borrowings), today);
    let overdue_lent = sum_overdue(&unsettled(lendings), today);

    DashboardTotals {
        total_income,
        total_expense,
        total_borrowed,
        total_lent,
        overdue_borrowed,
        overdue_lent,
        available_balance: available_balance(total_income, total_expense, total_borrowed, total_lent),
    }
}

/// Accumulates the period's expenses per category, in first-seen category
/// order. The list UIs rely on that stable order, not an alphabetical one.
pub fn category_breakdown(expenses: &[ExpenseEntry], period: Period) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for expense in filter_by_period(expenses, period) {
        match breakdown.iter_mut().find(|c| c.category == expense.category) {
            Some(existing) => existing.total += expense.amount,
            None => breakdown.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    breakdown
}

/// Orders entries newest-first by their derived `(year, month, day)`. The
/// sort is stable, so entries sharing a calendar date keep their input
/// order; no secondary timestamp exists to break such ties.
pub fn sort_by_recency<E: LedgerEntry + Clone>(entries: &[E]) -> Vec<E> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let key = |e: &E| {
            let period = e.period();
            (period.year, period.month, e.day())
        };
        key(b).cmp(&key(a))
    });
    sorted
}
