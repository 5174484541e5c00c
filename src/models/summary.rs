use crate::ledger::report::CategoryTotal;
use rocket::serde::Serialize;
use rust_decimal::Decimal;

/// The monthly report consumed by the reports page graphs: period totals,
/// savings, and the month's expense breakdown in first-seen category order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlySummaryResponse {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub savings: Decimal,
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
    pub unsettled_amount: Decimal,
    pub categories: Vec<CategoryTotal>,
}
