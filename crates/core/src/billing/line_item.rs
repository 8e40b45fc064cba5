//! Line items: one billable row of a quote or invoice.

use invoicer_shared::types::LineItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BillingError;
use crate::product::Product;

/// A billable row with its computed total.
///
/// `total` always equals `quantity * unit_price`; every mutation goes
/// through [`LineItem::apply`] which keeps it in sync. Products that do not
/// fit a `Decimal` are rejected with `AmountOverflow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Row identifier, stable across edits.
    pub id: LineItemId,
    /// Free-text description.
    pub description: String,
    /// Quantity billed.
    pub quantity: Decimal,
    /// Price per unit, before tax.
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub total: Decimal,
}

/// A single field edit on a line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemEdit {
    /// Replace the description. Does not affect the total.
    Description(String),
    /// Replace the quantity and recompute the total.
    Quantity(Decimal),
    /// Replace the unit price and recompute the total.
    UnitPrice(Decimal),
}

/// Line item as submitted by a client. Any submitted total is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Existing row id to keep, if any.
    #[serde(default)]
    pub id: Option<LineItemId>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Quantity billed.
    pub quantity: Decimal,
    /// Price per unit, before tax.
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a line item with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if `quantity * unit_price` does not fit.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, BillingError> {
        Ok(Self {
            id: LineItemId::new(),
            description: description.into(),
            quantity,
            unit_price,
            total: line_total(quantity, unit_price)?,
        })
    }

    /// An empty row: quantity 1, price 0.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: LineItemId::new(),
            description: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// A row billing one unit of a catalog product at its list price.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: LineItemId::new(),
            description: product.name.clone(),
            quantity: Decimal::ONE,
            unit_price: product.price,
            total: product.price,
        }
    }

    /// Applies a field edit. On error the row is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the new total does not fit.
    pub fn apply(&mut self, edit: LineItemEdit) -> Result<(), BillingError> {
        match edit {
            LineItemEdit::Description(description) => self.description = description,
            LineItemEdit::Quantity(quantity) => {
                self.total = line_total(quantity, self.unit_price)?;
                self.quantity = quantity;
            }
            LineItemEdit::UnitPrice(unit_price) => {
                self.total = line_total(self.quantity, unit_price)?;
                self.unit_price = unit_price;
            }
        }
        Ok(())
    }

    /// Recomputes `total` from quantity and unit price.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the product does not fit.
    pub fn recompute(&mut self) -> Result<(), BillingError> {
        self.total = line_total(self.quantity, self.unit_price)?;
        Ok(())
    }

    /// True when the description is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, BillingError> {
    quantity
        .checked_mul(unit_price)
        .ok_or(BillingError::AmountOverflow)
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = BillingError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        let mut item = Self::new(input.description, input.quantity, input.unit_price)?;
        if let Some(id) = input.id {
            item.id = id;
        }
        Ok(item)
    }
}

impl From<&LineItem> for LineItemInput {
    fn from(item: &LineItem) -> Self {
        Self {
            id: Some(item.id),
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}
