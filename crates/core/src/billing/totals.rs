//! Document totals and the flat tax policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BillingError;
use super::line_item::{LineItem, LineItemInput};

/// Flat tax applied to a document subtotal.
///
/// Product-level tax rates are informational only; every document uses this
/// single rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    rate: Decimal,
}

impl TaxPolicy {
    /// Standard French VAT rate (20%).
    pub const STANDARD_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

    /// Creates a flat policy. `rate` is a fraction (0.20 = 20%).
    ///
    /// # Errors
    ///
    /// Returns `InvalidTaxRate` if the rate is negative or above 1.
    pub fn flat(rate: Decimal) -> Result<Self, BillingError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(BillingError::InvalidTaxRate(rate));
        }
        Ok(Self { rate })
    }

    /// The rate as a fraction.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Tax due on `subtotal`.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the product does not fit.
    pub fn tax_on(&self, subtotal: Decimal) -> Result<Decimal, BillingError> {
        subtotal
            .checked_mul(self.rate)
            .ok_or(BillingError::AmountOverflow)
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            rate: Self::STANDARD_RATE,
        }
    }
}

/// Subtotal, tax and total of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// `subtotal * rate`.
    pub tax_amount: Decimal,
    /// `subtotal + tax_amount`.
    pub total: Decimal,
}

impl DocumentTotals {
    /// Computes totals from line items. Exact decimal arithmetic, no rounding.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a sum does not fit in a `Decimal`.
    pub fn compute(items: &[LineItem], policy: &TaxPolicy) -> Result<Self, BillingError> {
        let subtotal = checked_sum(items.iter().map(|item| item.total))?;
        let tax_amount = policy.tax_on(subtotal)?;
        let total = subtotal
            .checked_add(tax_amount)
            .ok_or(BillingError::AmountOverflow)?;

        Ok(Self {
            subtotal,
            tax_amount,
            total,
        })
    }

    /// Returns true if `total == subtotal + tax_amount`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.subtotal.checked_add(self.tax_amount) == Some(self.total)
    }
}

/// Adds up amounts, failing instead of panicking on overflow.
///
/// # Errors
///
/// Returns `AmountOverflow` if the sum does not fit in a `Decimal`.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, BillingError> {
    amounts.into_iter().try_fold(Decimal::ZERO, |sum, amount| {
        sum.checked_add(amount).ok_or(BillingError::AmountOverflow)
    })
}

/// Line items together with the totals derived from them.
///
/// Serialized flat: `items`, `subtotal`, `tax_amount`, `total`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricedLines {
    /// The document rows.
    pub items: Vec<LineItem>,
    /// Totals derived from `items`.
    #[serde(flatten)]
    pub totals: DocumentTotals,
}

impl PricedLines {
    /// A single blank row with zero totals.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            items: vec![LineItem::blank()],
            totals: DocumentTotals::default(),
        }
    }

    /// Prices submitted rows, recomputing every line total.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a line or document total does not fit.
    pub fn from_inputs(
        inputs: Vec<LineItemInput>,
        policy: &TaxPolicy,
    ) -> Result<Self, BillingError> {
        let items = inputs
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_items(items, policy)
    }

    /// Prices rows that are already line items.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a line or document total does not fit.
    pub fn from_items(mut items: Vec<LineItem>, policy: &TaxPolicy) -> Result<Self, BillingError> {
        for item in &mut items {
            item.recompute()?;
        }
        let totals = DocumentTotals::compute(&items, policy)?;
        Ok(Self { items, totals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Développement", dec!(2), dec!(100)).unwrap(),
            LineItem::new("Hébergement", dec!(1), dec!(50)).unwrap(),
            LineItem::new("Support", dec!(5), dec!(20)).unwrap(),
        ]
    }

    #[test]
    fn test_reference_example() {
        let totals = DocumentTotals::compute(&sample_items(), &TaxPolicy::default()).unwrap();

        assert_eq!(totals.subtotal, dec!(350));
        assert_eq!(totals.tax_amount, dec!(70));
        assert_eq!(totals.total, dec!(420));
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_empty_document_is_zero() {
        let totals = DocumentTotals::compute(&[], &TaxPolicy::default()).unwrap();
        assert_eq!(totals, DocumentTotals::default());
    }

    #[test]
    fn test_tax_is_exact() {
        let items = vec![LineItem::new("Petit article", dec!(1), dec!(0.33)).unwrap()];
        let totals = DocumentTotals::compute(&items, &TaxPolicy::default()).unwrap();

        assert_eq!(totals.tax_amount, dec!(0.066));
        assert_eq!(totals.total, dec!(0.396));
    }

    #[test]
    fn test_custom_rate() {
        let policy = TaxPolicy::flat(dec!(0.055)).unwrap();
        let totals = DocumentTotals::compute(&sample_items(), &policy).unwrap();
        assert_eq!(totals.tax_amount, dec!(19.25));
        assert_eq!(totals.total, dec!(369.25));
    }

    #[test]
    fn test_rate_bounds() {
        assert_eq!(TaxPolicy::default().rate(), dec!(0.20));
        assert!(TaxPolicy::flat(Decimal::ZERO).is_ok());
        assert!(TaxPolicy::flat(Decimal::ONE).is_ok());
        assert_eq!(
            TaxPolicy::flat(dec!(-0.1)),
            Err(BillingError::InvalidTaxRate(dec!(-0.1)))
        );
        assert!(TaxPolicy::flat(dec!(20)).is_err());
    }

    #[test]
    fn test_priced_lines_recompute_stale_totals() {
        let mut stale = LineItem::new("Formation", dec!(2), dec!(300)).unwrap();
        stale.total = dec!(1);

        let lines = PricedLines::from_items(vec![stale], &TaxPolicy::default()).unwrap();
        assert_eq!(lines.items[0].total, dec!(600));
        assert_eq!(lines.totals.total, dec!(720));
    }

    #[test]
    fn test_priced_lines_serialize_flat() {
        let lines = PricedLines::from_items(sample_items(), &TaxPolicy::default()).unwrap();
        let json = serde_json::to_value(&lines).unwrap();

        assert_eq!(json["subtotal"], "350");
        assert_eq!(json["total"], "420.00");
        assert_eq!(json["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_overflowing_subtotal_is_rejected() {
        let huge = Decimal::MAX;
        let rows = vec![
            LineItemInput {
                id: None,
                description: "Licence".to_string(),
                quantity: Decimal::ONE,
                unit_price: huge,
            },
            LineItemInput {
                id: None,
                description: "Licence bis".to_string(),
                quantity: Decimal::ONE,
                unit_price: huge,
            },
        ];

        assert_eq!(
            PricedLines::from_inputs(rows, &TaxPolicy::default()),
            Err(BillingError::AmountOverflow)
        );
    }

    #[test]
    fn test_overflowing_total_after_tax_is_rejected() {
        let items = vec![LineItem::new("Licence", Decimal::ONE, Decimal::MAX).unwrap()];

        assert_eq!(
            DocumentTotals::compute(&items, &TaxPolicy::default()),
            Err(BillingError::AmountOverflow)
        );
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum([dec!(1.5), dec!(2.5)]), Ok(dec!(4.0)));
        assert_eq!(
            checked_sum([Decimal::MAX, Decimal::ONE]),
            Err(BillingError::AmountOverflow)
        );
    }

    #[test]
    fn test_blank_lines() {
        let lines = PricedLines::blank();
        assert_eq!(lines.items.len(), 1);
        assert_eq!(lines.totals, DocumentTotals::default());
    }
}
