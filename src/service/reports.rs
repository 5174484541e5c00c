use crate::ledger::aggregate::sum_amounts;
use crate::ledger::entry::{DebtEntry, DebtKind, ExpenseEntry, IncomeEntry};
use crate::ledger::filter::{filter_by_period, filter_by_year};
use crate::ledger::period::Period;
use rocket::http::{ContentType, Header};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;

/// A rendered CSV attachment. Reports serialize data the aggregators have
/// already shaped; no totals are computed during rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvReport {
    pub filename: String,
    pub content: String,
}

impl<'r> Responder<'r, 'static> for CsvReport {
    fn respond_to(self, _: &Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::new("text", "csv"))
            .header(Header::new("Content-Disposition", format!("attachment; filename={}", self.filename)))
            .sized_body(self.content.len(), Cursor::new(self.content))
            .ok()
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    fields.iter().map(|f| csv_escape(f)).collect::<Vec<_>>().join(",")
}

/// The finance summary: income and expenses for the selected month,
/// borrowed and lent for the selected year. The month/year asymmetry is
/// what the reports page has always shown and is kept as-is.
pub fn finance_report(incomes: &[IncomeEntry], expenses: &[ExpenseEntry], borrowings: &[DebtEntry], lendings: &[DebtEntry], period: Period) -> CsvReport {
    let total_income = sum_amounts(&filter_by_period(incomes, period));
    let total_expense = sum_amounts(&filter_by_period(expenses, period));
    let total_borrowed = sum_amounts(&filter_by_year(borrowings, period.year));
    let total_lent = sum_amounts(&filter_by_year(lendings, period.year));

    let mut lines = vec![csv_row(&["Type", "Amount"])];
    lines.push(csv_row(&["Income", &total_income.to_string()]));
    lines.push(csv_row(&["Expenses", &total_expense.to_string()]));
    lines.push(csv_row(&["Borrowed", &total_borrowed.to_string()]));
    lines.push(csv_row(&["Lent", &total_lent.to_string()]));

    CsvReport {
        filename: format!("Finance_Report_{}_{}.csv", period.month, period.year),
        content: lines.join("\n") + "\n",
    }
}

/// The month's expenses, one row per entry, ordered by day of month.
pub fn expense_report(expenses: &[ExpenseEntry], period: Period) -> CsvReport {
    let mut month_expenses = filter_by_period(expenses, period);
    month_expenses.sort_by_key(|e| e.day);

    let mut lines = vec![csv_row(&["Date", "Title", "Category", "Amount"])];
    for expense in &month_expenses {
        let date = format!("{} {}", expense.day, expense.month);
        lines.push(csv_row(&[&date, &expense.title, &expense.category, &expense.amount.to_string()]));
    }

    CsvReport {
        filename: format!("Expenses_{}_{}.csv", period.month, period.year),
        content: lines.join("\n") + "\n",
    }
}

/// The month's incomes, one row per entry.
pub fn income_report(incomes: &[IncomeEntry], period: Period) -> CsvReport {
    let month_incomes = filter_by_period(incomes, period);

    let mut lines = vec![csv_row(&["Date", "Source", "Amount"])];
    for income in &month_incomes {
        let date = format!("{} {}", income.date.day, income.month);
        lines.push(csv_row(&[&date, &income.source, &income.amount.to_string()]));
    }

    CsvReport {
        filename: format!("Income_{}_{}.csv", period.month, period.year),
        content: lines.join("\n") + "\n",
    }
}

/// Every borrowing and lending with its full due date, borrowings first.
pub fn debt_report(borrowings: &[DebtEntry], lendings: &[DebtEntry], period: Period) -> CsvReport {
    let mut lines = vec![csv_row(&["Name", "Type", "Due Date", "Amount"])];
    for entry in borrowings.iter().chain(lendings.iter()) {
        let kind = match entry.kind {
            DebtKind::Borrowing => "Borrowed",
            DebtKind::Lending => "Lent",
        };
        lines.push(csv_row(&[&entry.name, kind, &entry.due_date.format_iso(), &entry.amount.to_string()]));
    }

    CsvReport {
        filename: format!("Borrow_Lend_{}_{}.csv", period.month, period.year),
        content: lines.join("\n") + "\n",
    }
}
