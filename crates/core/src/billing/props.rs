//! Property-based tests for billing arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::line_item::{LineItem, LineItemEdit};
use super::totals::{DocumentTotals, TaxPolicy};

/// Strategy for a quantity between 0 and 1000 with up to two decimals.
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy for a unit price between 0.00 and 100,000.00.
fn unit_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(
        (quantity(), unit_price()).prop_map(|(q, p)| LineItem::new("Ligne", q, p).unwrap()),
        0..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Subtotal is the sum of quantity * unit price over all rows.
    #[test]
    fn prop_subtotal_is_sum_of_lines(items in line_items()) {
        let totals = DocumentTotals::compute(&items, &TaxPolicy::default()).unwrap();
        let expected: Decimal = items.iter().map(|i| i.quantity * i.unit_price).sum();

        prop_assert_eq!(totals.subtotal, expected);
    }

    /// Total is subtotal plus 20% of subtotal, exactly.
    #[test]
    fn prop_total_is_subtotal_plus_flat_tax(items in line_items()) {
        let totals = DocumentTotals::compute(&items, &TaxPolicy::default()).unwrap();

        prop_assert_eq!(totals.tax_amount, totals.subtotal * Decimal::new(2, 1));
        prop_assert_eq!(totals.total, totals.subtotal + totals.subtotal * Decimal::new(2, 1));
        prop_assert!(totals.is_consistent());
    }

    /// Quantity and unit price edits keep the line total in sync.
    #[test]
    fn prop_numeric_edits_recompute_total(
        q in quantity(),
        p in unit_price(),
        new_q in quantity(),
        new_p in unit_price(),
    ) {
        let mut item = LineItem::new("Ligne", q, p).unwrap();

        item.apply(LineItemEdit::Quantity(new_q)).unwrap();
        prop_assert_eq!(item.total, new_q * p);

        item.apply(LineItemEdit::UnitPrice(new_p)).unwrap();
        prop_assert_eq!(item.total, new_q * new_p);
    }

    /// Description edits never change the total.
    #[test]
    fn prop_description_edit_keeps_total(
        q in quantity(),
        p in unit_price(),
        description in "[a-zA-Z ]{0,30}",
    ) {
        let mut item = LineItem::new("Ligne", q, p).unwrap();
        let before = item.total;

        item.apply(LineItemEdit::Description(description.clone())).unwrap();

        prop_assert_eq!(item.total, before);
        prop_assert_eq!(item.description, description);
    }
}
