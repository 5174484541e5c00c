use crate::ledger::entry::LedgerEntry;
use rust_decimal::Decimal;

/// Plain total over entry amounts. Empty input sums to zero; that is a
/// valid result, not an error. Amounts are exact decimals parsed at the
/// request boundary, so the sum cannot degrade into a NaN the way a
/// float-typed pipeline could.
pub fn sum_amounts<E: LedgerEntry>(entries: &[E]) -> Decimal {
    entries.iter().fold(Decimal::ZERO, |acc, e| acc + e.amount())
}

/// The liquidity metric shown on the dashboard and reports.
///
/// Borrowed money is a liability and does not inflate the balance; lent
/// money counts toward it. Every consumer depends on this exact sign
/// convention, so it must not be "corrected".
pub fn available_balance(total_income: Decimal, total_expense: Decimal, total_borrowed: Decimal, total_lent: Decimal) -> Decimal {
    total_income - total_expense - total_borrowed + total_lent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::IncomeEntry;
    use crate::ledger::period::CalendarDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn income(amount: Decimal) -> IncomeEntry {
        IncomeEntry::normalize(Uuid::new_v4(), "x".into(), None, amount, CalendarDate::parse("2025-01-01").unwrap())
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let entries: Vec<IncomeEntry> = Vec::new();
        assert_eq!(sum_amounts(&entries), Decimal::ZERO);
    }

    #[test]
    fn sum_is_associative_under_concatenation() {
        let a = vec![income(dec!(10.25)), income(dec!(0.75))];
        let b = vec![income(dec!(89))];

        let mut concatenated = a.clone();
        concatenated.extend(b.clone());

        assert_eq!(sum_amounts(&concatenated), sum_amounts(&a) + sum_amounts(&b));
        assert_eq!(sum_amounts(&concatenated), dec!(100));
    }

    #[test]
    fn available_balance_sign_convention() {
        assert_eq!(available_balance(dec!(1000), dec!(300), dec!(200), dec!(150)), dec!(650));
        assert_eq!(available_balance(Decimal::ZERO, Decimal::ZERO, dec!(50), Decimal::ZERO), dec!(-50));
        assert_eq!(available_balance(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, dec!(50)), dec!(50));
    }
}
