use crate::database::borrowing::BorrowingRepository;
use crate::database::expense::ExpenseRepository;
use crate::database::income::IncomeRepository;
use crate::database::lending::LendingRepository;
use crate::error::app_error::AppError;
use crate::ledger::aggregate::sum_amounts;
use crate::ledger::entry::{DebtEntry, ExpenseEntry, IncomeEntry};
use crate::ledger::filter::filter_by_period;
use crate::ledger::period::{CalendarDate, Period};
use crate::ledger::report::{DashboardTotals, build_dashboard, category_breakdown};
use crate::models::summary::MonthlySummaryResponse;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Assembles dashboard and report data for one user.
///
/// Each collection is fetched once per service instance and normalized into
/// ledger entries; every aggregation after that is a pure function of the
/// snapshot, so the dashboard and an export served back-to-back from the
/// same instance see identical data.
pub struct DashboardService<'a, R> {
    repository: &'a R,
    user_id: Uuid,
    incomes: Option<Arc<Vec<IncomeEntry>>>,
    expenses: Option<Arc<Vec<ExpenseEntry>>>,
    borrowings: Option<Arc<Vec<DebtEntry>>>,
    lendings: Option<Arc<Vec<DebtEntry>>>,
}

impl<'a, R> DashboardService<'a, R>
where
    R: IncomeRepository + ExpenseRepository + BorrowingRepository + LendingRepository,
{
    pub fn new(repository: &'a R, user_id: Uuid) -> Self {
        Self {
            repository,
            user_id,
            incomes: None,
            expenses: None,
            borrowings: None,
            lendings: None,
        }
    }

    pub async fn incomes(&mut self) -> Result<Arc<Vec<IncomeEntry>>, AppError> {
        if self.incomes.is_none() {
            let rows = self.repository.list_incomes(&self.user_id).await?;
            let entries = rows.iter().map(IncomeEntry::from).collect();
            self.incomes = Some(Arc::new(entries));
        }

        Ok(Arc::clone(self.incomes.as_ref().expect("memoized above")))
    }

    pub async fn expenses(&mut self) -> Result<Arc<Vec<ExpenseEntry>>, AppError> {
        if self.expenses.is_none() {
            let rows = self.repository.list_expenses(&self.user_id).await?;
            let entries = rows.iter().map(ExpenseEntry::from).collect();
            self.expenses = Some(Arc::new(entries));
        }

        Ok(Arc::clone(self.expenses.as_ref().expect("memoized above")))
    }

    pub async fn borrowings(&mut self) -> Result<Arc<Vec<DebtEntry>>, AppError> {
        if self.borrowings.is_none() {
            let rows = self.repository.list_borrowings(&self.user_id, false).await?;
            let entries = rows.iter().map(DebtEntry::from).collect();
            self.borrowings = Some(Arc::new(entries));
        }

        Ok(Arc::clone(self.borrowings.as_ref().expect("memoized above")))
    }

    pub async fn lendings(&mut self) -> Result<Arc<Vec<DebtEntry>>, AppError> {
        if self.lendings.is_none() {
            let rows = self.repository.list_lendings(&self.user_id, false).await?;
            let entries = rows.iter().map(DebtEntry::from).collect();
            self.lendings = Some(Arc::new(entries));
        }

        Ok(Arc::clone(self.lendings.as_ref().expect("memoized above")))
    }

    /// The dashboard totals for one period, with one `today` snapshot for
    /// the whole report.
    pub async fn summary(&mut self, period: Period, today: CalendarDate) -> Result<DashboardTotals, AppError> {
        let incomes = self.incomes().await?;
        let expenses = self.expenses().await?;
        let borrowings = self.borrowings().await?;
        let lendings = self.lendings().await?;

        Ok(build_dashboard(&incomes, &expenses, &borrowings, &lendings, period, today))
    }

    pub async fn monthly_summary(&mut self, period: Period) -> Result<MonthlySummaryResponse, AppError> {
        let incomes = self.incomes().await?;
        let expenses = self.expenses().await?;
        let borrowings = self.borrowings().await?;
        let lendings = self.lendings().await?;

        Ok(monthly_summary_from_data(&incomes, &expenses, &borrowings, &lendings, period))
    }
}

fn monthly_summary_from_data(
    incomes: &[IncomeEntry],
    expenses: &[ExpenseEntry],
    borrowings: &[DebtEntry],
    lendings: &[DebtEntry],
    period: Period,
) -> MonthlySummaryResponse {
    let total_income = sum_amounts(&filter_by_period(incomes, period));
    let total_expense = sum_amounts(&filter_by_period(expenses, period));
    let total_borrowed = sum_amounts(&filter_by_period(borrowings, period));
    let total_lent = sum_amounts(&filter_by_period(lendings, period));

    let unsettled_amount = borrowings
        .iter()
        .chain(lendings.iter())
        .filter(|e| !e.settled)
        .fold(Decimal::ZERO, |acc, e| acc + e.amount);

    MonthlySummaryResponse {
        total_income,
        total_expense,
        savings: total_income - total_expense,
        total_borrowed,
        total_lent,
        unsettled_amount,
        categories: category_breakdown(expenses, period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::DebtKind;
    use crate::ledger::period::Month;
    use crate::test_utils::MockRepository;
    use rust_decimal_macros::dec;

    fn income(date: &str, amount: Decimal) -> IncomeEntry {
        IncomeEntry::normalize(Uuid::new_v4(), "Salary".into(), None, amount, CalendarDate::parse(date).unwrap())
    }

    fn expense(date: &str, category: &str, amount: Decimal) -> ExpenseEntry {
        ExpenseEntry::normalize(Uuid::new_v4(), "item".into(), category.into(), amount, CalendarDate::parse(date).unwrap())
    }

    fn debt(kind: DebtKind, date: &str, due: &str, amount: Decimal, settled: bool) -> DebtEntry {
        DebtEntry::normalize(
            Uuid::new_v4(),
            kind,
            "Alice".into(),
            amount,
            CalendarDate::parse(date).unwrap(),
            CalendarDate::parse(due).unwrap(),
            settled,
        )
    }

    #[test]
    fn monthly_summary_filters_all_four_kinds_by_period() {
        let period = Period::new(2025, Month::March);

        let incomes = vec![income("2025-03-01", dec!(1000)), income("2025-04-01", dec!(500))];
        let expenses = vec![expense("2025-03-05", "Food", dec!(300)), expense("2025-02-05", "Food", dec!(90))];
        let borrowings = vec![debt(DebtKind::Borrowing, "2025-03-07", "2025-04-07", dec!(200), false)];
        let lendings = vec![debt(DebtKind::Lending, "2025-01-02", "2025-02-02", dec!(40), true)];

        let summary = monthly_summary_from_data(&incomes, &expenses, &borrowings, &lendings, period);
        assert_eq!(summary.total_income, dec!(1000));
        assert_eq!(summary.total_expense, dec!(300));
        assert_eq!(summary.savings, dec!(700));
        assert_eq!(summary.total_borrowed, dec!(200));
        assert_eq!(summary.total_lent, Decimal::ZERO);
        // Unsettled spans every period; the settled lending is excluded.
        assert_eq!(summary.unsettled_amount, dec!(200));
    }

    #[test]
    fn monthly_summary_category_breakdown_keeps_first_seen_order() {
        let period = Period::new(2025, Month::March);
        let expenses = vec![
            expense("2025-03-01", "Food", dec!(100)),
            expense("2025-03-02", "Travel", dec!(50)),
            expense("2025-03-03", "Food", dec!(25)),
        ];

        let summary = monthly_summary_from_data(&[], &expenses, &[], &[], period);
        let names: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Food", "Travel"]);
        assert_eq!(summary.categories[0].total, dec!(125));
    }

    #[rocket::async_test]
    async fn service_memoizes_and_composes_the_snapshot() {
        let repository = MockRepository::default()
            .with_income("2025-03-01", dec!(1000))
            .with_expense("2025-03-02", "Food", dec!(300))
            .with_borrowing("2025-03-03", "2025-02-10", dec!(200), false)
            .with_lending("2025-03-04", "2025-05-01", dec!(150), false);

        let mut service = DashboardService::new(&repository, Uuid::new_v4());
        let period = Period::new(2025, Month::March);
        let today = CalendarDate::parse("2025-03-15").unwrap();

        let totals = service.summary(period, today).await.unwrap();
        assert_eq!(totals.total_income, dec!(1000));
        assert_eq!(totals.total_expense, dec!(300));
        assert_eq!(totals.total_borrowed, dec!(200));
        assert_eq!(totals.total_lent, dec!(150));
        assert_eq!(totals.overdue_borrowed, dec!(200));
        assert_eq!(totals.available_balance, dec!(650));

        // Second aggregation reuses the fetched snapshot.
        let monthly = service.monthly_summary(period).await.unwrap();
        assert_eq!(monthly.savings, dec!(700));
        assert_eq!(repository.fetch_count(), 4);
    }
}
