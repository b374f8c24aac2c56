//! Property-based tests for the order totals pipeline.
//!
//! The totals math is a pure integer fold, so its contract can be stated
//! as properties over arbitrary well-formed line items:
//!
//! 1. total = Σ unit_price × quantity (checked against an independent fold)
//! 2. empty order totals zero
//! 3. zero-quantity lines contribute nothing
//! 4. item order never changes the total
//! 5. recomputing totals never changes the result (no hidden state)
//! 6. totals are non-negative for non-negative inputs
//! 7. discount and tax adjustments stay within their arithmetic bounds

use proptest::prelude::*;
use storefront_core::{LineItem, Order, TaxRate};

/// One (unit_price_cents, quantity) pair within realistic storefront
/// bounds. Sums stay far from i64 overflow: 10_000 items × $10,000 × 999
/// is still well under 2^63 cents.
fn line_values() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=1_000_000, 0i64..=999)
}

fn items_from(values: &[(i64, i64)]) -> Vec<LineItem> {
    values
        .iter()
        .enumerate()
        .map(|(n, &(price, qty))| {
            LineItem::new(
                format!("p-{}", n),
                format!("SKU-{}", n),
                format!("Product {}", n),
                price,
                qty,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn total_matches_reference_fold(values in prop::collection::vec(line_values(), 0..=50)) {
        let order = Order::from(items_from(&values));

        // Independent fold in i128, multiply before accumulate
        let expected: i128 = values
            .iter()
            .map(|&(price, qty)| price as i128 * qty as i128)
            .sum();

        prop_assert_eq!(order.subtotal_cents() as i128, expected);
        // No adjustments configured, so the total IS the subtotal
        prop_assert_eq!(order.total_cents(), order.subtotal_cents());
    }

    #[test]
    fn zero_quantity_lines_contribute_nothing(
        values in prop::collection::vec(line_values(), 0..=20),
        zero_prices in prop::collection::vec(0i64..=1_000_000, 0..=20),
    ) {
        let base = Order::from(items_from(&values));

        // Append extra lines that all carry quantity 0
        let mut padded_values = values.clone();
        padded_values.extend(zero_prices.iter().map(|&p| (p, 0)));
        let padded = Order::from(items_from(&padded_values));

        prop_assert_eq!(padded.total_cents(), base.total_cents());
    }

    #[test]
    fn item_order_does_not_change_total(values in prop::collection::vec(line_values(), 0..=50)) {
        let forward = Order::from(items_from(&values));

        let mut reversed_values = values.clone();
        reversed_values.reverse();
        let reversed = Order::from(items_from(&reversed_values));

        prop_assert_eq!(forward.total_cents(), reversed.total_cents());
    }

    #[test]
    fn totals_are_idempotent(values in prop::collection::vec(line_values(), 0..=50)) {
        let order = Order::from(items_from(&values));

        let first = order.totals();
        let second = order.totals();

        prop_assert_eq!(first.subtotal_cents, second.subtotal_cents);
        prop_assert_eq!(first.total_cents, second.total_cents);
        prop_assert_eq!(first.total_quantity, second.total_quantity);
    }

    #[test]
    fn totals_are_non_negative_for_valid_input(values in prop::collection::vec(line_values(), 0..=50)) {
        let order = Order::from(items_from(&values));
        prop_assert!(order.total_cents() >= 0,
            "total must be non-negative for non-negative input, got {}",
            order.total_cents());
    }

    #[test]
    fn discount_never_exceeds_subtotal(
        values in prop::collection::vec(line_values(), 0..=30),
        discount_bps in 0u32..=10_000,
    ) {
        let mut order = Order::from(items_from(&values));
        order.discount_bps = discount_bps;

        let subtotal = order.subtotal_cents();
        let discount = order.discount_cents();

        prop_assert!(discount >= 0);
        prop_assert!(discount <= subtotal);
        // Full discount wipes the subtotal exactly
        if discount_bps == 10_000 {
            prop_assert_eq!(discount, subtotal);
        }
    }

    #[test]
    fn total_composes_from_parts(
        values in prop::collection::vec(line_values(), 0..=30),
        discount_bps in 0u32..=10_000,
        tax_bps in 0u32..=2_500,
    ) {
        let mut order = Order::from(items_from(&values));
        order.discount_bps = discount_bps;
        order.tax_rate = TaxRate::from_bps(tax_bps);

        let totals = order.totals();
        prop_assert_eq!(
            totals.total_cents,
            totals.subtotal_cents - totals.discount_cents + totals.tax_cents
        );
        prop_assert!(totals.tax_cents >= 0);
    }
}

mod fixed_cases {
    use super::*;

    #[test]
    fn empty_order_totals_zero() {
        let order = Order::new();
        assert_eq!(order.total_cents(), 0);
    }

    #[test]
    fn single_zero_quantity_line_totals_zero() {
        let order = Order::from(items_from(&[(1000, 0)]));
        assert_eq!(order.total_cents(), 0);
    }

    #[test]
    fn three_at_nineteen_ninety_nine() {
        let order = Order::from(items_from(&[(1999, 3)]));
        assert_eq!(order.total_cents(), 5997);
    }

    #[test]
    fn small_fractions_do_not_drift() {
        // The classic float failure: 0.1 × 3 + 0.2 must be exactly 0.50,
        // never 0.49999...
        let order = Order::from(items_from(&[(10, 3), (20, 1)]));
        assert_eq!(order.total_cents(), 50);
    }

    #[test]
    fn negative_lines_are_permitted() {
        // Return lines are the caller's responsibility; the math sums them
        let order = Order::from(vec![
            LineItem::new("p-0", "SKU-0", "Item", 1000, 2),
            LineItem::new("p-1", "SKU-1", "Return", -500, 1),
        ]);
        assert_eq!(order.total_cents(), 1500);
    }
}
