//! Order total computation
//!
//! Mirrors the order service's arithmetic so mutations can be shown
//! optimistically before the server's authoritative totals come back.

use serde::{Deserialize, Serialize};

use super::types::{AdditionalCharge, Discount, DiscountType, OrderItem};

/// Derived order totals, always recomputed from the parts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub additional_charges_total: f64,
    /// Never negative
    pub total_price: f64,
}

/// Sum of extended line prices before discount and surcharges
pub fn subtotal(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price_at_order * item.quantity as f64)
        .sum()
}

/// Monetary reduction for a discount against the given subtotal
///
/// A fixed discount is clamped to the subtotal. A percentage above 100 is
/// not clamped here; the final total's zero floor is the only backstop.
pub fn discount_amount(subtotal: f64, discount: Option<&Discount>) -> f64 {
    match discount {
        Some(discount) if discount.value > 0.0 => match discount.discount_type {
            DiscountType::Percentage => subtotal * discount.value / 100.0,
            DiscountType::Fixed => discount.value.min(subtotal),
        },
        _ => 0.0,
    }
}

/// Sum of all additional charges, zero when there are none
pub fn additional_charges_total(charges: &[AdditionalCharge]) -> f64 {
    charges.iter().map(|charge| charge.amount).sum()
}

/// Compute the full totals quartet from an order's parts
///
/// Steps in order: subtotal, then the discount against that subtotal, then
/// the charge sum, then `total = max(0, subtotal - discount + charges)`.
pub fn calculate_order_totals(
    items: &[OrderItem],
    discount: Option<&Discount>,
    additional_charges: &[AdditionalCharge],
) -> OrderTotals {
    let subtotal = subtotal(items);
    let discount_amount = discount_amount(subtotal, discount);
    let additional_charges_total = additional_charges_total(additional_charges);
    let total_price = (subtotal - discount_amount + additional_charges_total).max(0.0);

    OrderTotals {
        subtotal,
        discount_amount,
        additional_charges_total,
        total_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::types::OrderItem;

    fn line(food_id: &str, quantity: i32, price: f64) -> OrderItem {
        OrderItem::new(food_id, quantity, price)
    }

    #[test]
    fn test_subtotal_sums_extended_prices() {
        let items = vec![line("tea", 2, 20.0), line("burger", 1, 180.0)];
        assert_eq!(subtotal(&items), 220.0);
        assert_eq!(subtotal(&[]), 0.0);
    }

    #[test]
    fn test_percentage_discount() {
        assert_eq!(
            discount_amount(100.0, Some(&Discount::percentage(20.0))),
            20.0
        );
    }

    #[test]
    fn test_fixed_discount_clamps_to_subtotal() {
        assert_eq!(discount_amount(100.0, Some(&Discount::fixed(150.0))), 100.0);
        assert_eq!(discount_amount(100.0, Some(&Discount::fixed(30.0))), 30.0);
    }

    // A percentage above 100 is deliberately not clamped, unlike the fixed
    // path; only total_price floors at zero.
    #[test]
    fn test_percentage_discount_above_hundred_is_unclamped() {
        assert_eq!(
            discount_amount(100.0, Some(&Discount::percentage(150.0))),
            150.0
        );

        let items = vec![line("tea", 5, 20.0)];
        let totals = calculate_order_totals(&items, Some(&Discount::percentage(150.0)), &[]);
        assert_eq!(totals.discount_amount, 150.0);
        assert_eq!(totals.total_price, 0.0);
    }

    #[test]
    fn test_zero_or_negative_discount_value_is_ignored() {
        assert_eq!(discount_amount(100.0, Some(&Discount::percentage(0.0))), 0.0);
        assert_eq!(discount_amount(100.0, Some(&Discount::fixed(-5.0))), 0.0);
        assert_eq!(discount_amount(100.0, None), 0.0);
    }

    #[test]
    fn test_charges_total() {
        let charges = vec![
            AdditionalCharge::new(15.0, "service"),
            AdditionalCharge::new(5.0, "corkage"),
        ];
        assert_eq!(additional_charges_total(&charges), 20.0);
        assert_eq!(additional_charges_total(&[]), 0.0);
    }

    #[test]
    fn test_negative_charges_sum_without_individual_clamping() {
        let charges = vec![
            AdditionalCharge::new(10.0, "service"),
            AdditionalCharge::new(-25.0, "goodwill"),
        ];
        assert_eq!(additional_charges_total(&charges), -15.0);
    }

    #[test]
    fn test_full_totals_composition() {
        // subtotal 200, 10% discount (20), charges 15 + 5 = 20
        let items = vec![line("pizza", 1, 200.0)];
        let charges = vec![
            AdditionalCharge::new(15.0, "service"),
            AdditionalCharge::new(5.0, "corkage"),
        ];
        let totals =
            calculate_order_totals(&items, Some(&Discount::percentage(10.0)), &charges);

        assert_eq!(totals.subtotal, 200.0);
        assert_eq!(totals.discount_amount, 20.0);
        assert_eq!(totals.additional_charges_total, 20.0);
        assert_eq!(totals.total_price, 200.0);
    }

    #[test]
    fn test_total_floors_at_zero() {
        let items = vec![line("tea", 1, 50.0)];
        let totals = calculate_order_totals(&items, Some(&Discount::fixed(50.0)), &[]);
        assert_eq!(totals.total_price, 0.0);

        let charges = vec![AdditionalCharge::new(-100.0, "refund")];
        let totals = calculate_order_totals(&items, None, &charges);
        assert_eq!(totals.total_price, 0.0);
    }

    #[test]
    fn test_totals_are_idempotent() {
        let items = vec![line("tea", 2, 20.0), line("pizza", 1, 200.0)];
        let discount = Discount::percentage(10.0);
        let charges = vec![AdditionalCharge::new(7.5, "service")];

        let first = calculate_order_totals(&items, Some(&discount), &charges);
        let second = calculate_order_totals(&items, Some(&discount), &charges);
        assert_eq!(first, second);
    }
}
