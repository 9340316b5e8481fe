use bigdecimal::rounding::RoundingMode;
use bigdecimal::{BigDecimal, Zero};

use super::order::ProductSelection;

/// Monetary amounts are displayed and stored with two decimal places.
pub const BILL_SCALE: i64 = 2;

/// Total bill over the given selections: Σ(unit price × quantity) for
/// selections with quantity > 0, rounded half-up to two decimal places.
/// Empty input totals to 0. Negative quantities never reach this function;
/// the lifecycle manager rejects them first.
pub fn order_total(selections: &[ProductSelection]) -> BigDecimal {
    let zero = BigDecimal::zero();
    let sum: BigDecimal = selections
        .iter()
        .filter(|s| s.quantity > zero)
        .map(|s| &s.unit_price * &s.quantity)
        .sum();
    sum.with_scale_round(BILL_SCALE, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn selection(price: &str, quantity: &str) -> ProductSelection {
        ProductSelection {
            product_id: "rice".to_string(),
            product_name: "Rice".to_string(),
            unit_price: BigDecimal::from_str(price).expect("valid price"),
            quantity: BigDecimal::from_str(quantity).expect("valid quantity"),
            received_quantity: None,
        }
    }

    #[test]
    fn empty_input_totals_zero() {
        assert_eq!(order_total(&[]), BigDecimal::from_str("0.00").unwrap());
    }

    #[test]
    fn sums_price_times_quantity() {
        let total = order_total(&[selection("50", "2"), selection("44", "1")]);
        assert_eq!(total, BigDecimal::from_str("144.00").unwrap());
    }

    #[test]
    fn fractional_quantities_are_supported() {
        // 0.5 kg of oil at 150/kg
        let total = order_total(&[selection("150", "0.5")]);
        assert_eq!(total, BigDecimal::from_str("75.00").unwrap());
    }

    #[test]
    fn zero_quantity_lines_are_excluded() {
        let total = order_total(&[selection("50", "2"), selection("280", "0")]);
        assert_eq!(total, BigDecimal::from_str("100.00").unwrap());
    }

    #[test]
    fn rounds_half_up_to_two_places() {
        let total = order_total(&[selection("7.333", "3")]);
        assert_eq!(total, BigDecimal::from_str("22.00").unwrap());

        let total = order_total(&[selection("0.125", "1")]);
        assert_eq!(total, BigDecimal::from_str("0.13").unwrap());
    }

}
