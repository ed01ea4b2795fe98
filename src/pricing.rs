//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartEntry;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No entries were provided, so currency could not be determined.
    #[error("no entries provided; cannot determine currency")]
    NoEntries,

    /// A line total exceeded the representable minor-unit amount.
    #[error("line total exceeds the representable amount")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total for one line as unit price times quantity.
///
/// The multiplication is done in minor units with overflow checking, so a
/// pathological quantity surfaces as an error instead of wrapping.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: The product of price and quantity does
///   not fit in the minor-unit representation.
pub fn line_total<'a>(
    unit_price: Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor, unit_price.currency()))
}

/// Calculates the total price of a list of cart entries.
///
/// # Errors
///
/// - [`TotalPriceError::NoEntries`]: No entries were provided, so currency
///   could not be determined.
/// - [`TotalPriceError::Overflow`]: A line total overflowed.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency
///   mismatch error.
pub fn cart_total<'a>(entries: &[CartEntry<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = entries.first().ok_or(TotalPriceError::NoEntries)?;

    entries.iter().try_fold(
        Money::from_minor(0, first.product().price.currency()),
        |acc, entry| {
            let line = line_total(entry.product().price, entry.quantity())?;

            Ok(acc.add(line)?)
        },
    )
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{cart::Cart, products::Product};

    use super::*;

    fn product(id: &str, minor: i64) -> Product<'static> {
        Product {
            id: id.into(),
            name: id.to_string(),
            description: String::new(),
            price: Money::from_minor(minor, USD),
            stock: None,
        }
    }

    #[test]
    fn line_total_multiplies_unit_price_by_quantity() -> TestResult {
        let total = line_total(Money::from_minor(550, USD), 3)?;

        assert_eq!(total, Money::from_minor(1650, USD));

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_an_error() {
        let result = line_total(Money::from_minor(i64::MAX, USD), 2);

        assert_eq!(result, Err(TotalPriceError::Overflow));
    }

    #[test]
    fn cart_total_sums_all_lines() -> TestResult {
        let mut cart = Cart::new(USD);

        cart.add(product("a", 1000))?;
        cart.add(product("a", 1000))?;
        cart.add(product("b", 550))?;

        assert_eq!(cart_total(cart.entries())?, Money::from_minor(2550, USD));

        Ok(())
    }

    #[test]
    fn cart_total_empty_returns_no_entries() {
        assert!(matches!(cart_total(&[]), Err(TotalPriceError::NoEntries)));
    }
}
