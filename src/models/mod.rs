pub mod borrowing;
pub mod expense;
pub mod health;
pub mod income;
pub mod lending;
pub mod session;
pub mod summary;
pub mod user;

use crate::error::app_error::AppError;
use rust_decimal::Decimal;

/// Amounts must be strictly positive; the aggregators assume this holds
/// and never re-check it.
pub(crate) fn ensure_positive_amount(amount: &Decimal) -> Result<(), AppError> {
    if *amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("amount must be strictly positive, got {}", amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_positive_amount;
    use crate::error::app_error::AppError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(ensure_positive_amount(&dec!(0.01)).is_ok());
        assert!(matches!(ensure_positive_amount(&Decimal::ZERO), Err(AppError::InvalidInput(_))));
        assert!(matches!(ensure_positive_amount(&dec!(-5)), Err(AppError::InvalidInput(_))));
    }
}
