//! Product domain types.

use chrono::{DateTime, Utc};
use invoicer_shared::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProductError;
use crate::text::non_blank;

/// Billing unit of a product.
///
/// Wire values are the labels used by the catalog forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductUnit {
    /// Per unit.
    #[default]
    #[serde(rename = "unit")]
    Unit,
    /// Per hour.
    #[serde(rename = "heure")]
    Hour,
    /// Per day.
    #[serde(rename = "jour")]
    Day,
    /// Per month.
    #[serde(rename = "mois")]
    Month,
    /// Per project.
    #[serde(rename = "projet")]
    Project,
}

/// A product or service that can be added to a quote or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name, copied into line item descriptions.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Unit price before tax.
    pub price: Decimal,
    /// Catalog category (free text, e.g. "Conseil").
    pub category: String,
    /// Tax rate in percent. Informational: documents use the flat billing rate.
    pub tax_rate: Decimal,
    /// Billing unit.
    pub unit: ProductUnit,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CreateProductInput {
    /// Name (required).
    pub name: String,
    /// Description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Category.
    pub category: String,
    /// Tax rate in percent.
    pub tax_rate: Decimal,
    /// Billing unit.
    pub unit: ProductUnit,
    /// Notes.
    pub notes: Option<String>,
}

impl Default for CreateProductInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            category: String::new(),
            tax_rate: Decimal::from(20),
            unit: ProductUnit::default(),
            notes: None,
        }
    }
}

/// Partial update of a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductInput {
    /// Name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<Decimal>,
    /// Category.
    pub category: Option<String>,
    /// Tax rate in percent.
    pub tax_rate: Option<Decimal>,
    /// Billing unit.
    pub unit: Option<ProductUnit>,
    /// Notes; an empty string clears them.
    pub notes: Option<String>,
}

impl Product {
    /// Known catalog categories offered by the product form.
    pub const KNOWN_CATEGORIES: [&'static str; 6] = [
        "Développement",
        "Design",
        "Conseil",
        "Formation",
        "Support",
        "Autre",
    ];

    /// Validates input and builds a new product stamped at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ProductError` for a blank name, negative price or bad tax rate.
    pub fn create(input: CreateProductInput, now: DateTime<Utc>) -> Result<Self, ProductError> {
        let product = Self {
            id: ProductId::new(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            price: input.price,
            category: input.category.trim().to_string(),
            tax_rate: input.tax_rate,
            unit: input.unit,
            notes: non_blank(input.notes),
            created_at: now,
            updated_at: now,
        };
        product.validate()?;
        Ok(product)
    }

    /// Merges supplied fields and restamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `ProductError` if the merged product is invalid; the product is
    /// then left unchanged.
    pub fn apply_update(
        &mut self,
        update: UpdateProductInput,
        now: DateTime<Utc>,
    ) -> Result<(), ProductError> {
        let mut next = self.clone();

        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            next.description = description.trim().to_string();
        }
        if let Some(price) = update.price {
            next.price = price;
        }
        if let Some(category) = update.category {
            next.category = category.trim().to_string();
        }
        if let Some(tax_rate) = update.tax_rate {
            next.tax_rate = tax_rate;
        }
        if let Some(unit) = update.unit {
            next.unit = unit;
        }
        if update.notes.is_some() {
            next.notes = non_blank(update.notes);
        }

        next.validate()?;
        next.updated_at = now;
        *self = next;
        Ok(())
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.name.is_empty() {
            return Err(ProductError::MissingName);
        }
        if self.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(self.price));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE_HUNDRED {
            return Err(ProductError::InvalidTaxRate(self.tax_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn input() -> CreateProductInput {
        CreateProductInput {
            name: "Consultation stratégique".to_string(),
            description: "Audit et conseil en stratégie digitale".to_string(),
            price: dec!(150),
            category: "Conseil".to_string(),
            unit: ProductUnit::Hour,
            ..CreateProductInput::default()
        }
    }

    #[test]
    fn test_create_defaults() {
        let now = Utc::now();
        let product = Product::create(input(), now).unwrap();

        assert_eq!(product.tax_rate, dec!(20));
        assert_eq!(product.unit, ProductUnit::Hour);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_create_validation() {
        let now = Utc::now();
        assert_eq!(
            Product::create(
                CreateProductInput {
                    name: " ".to_string(),
                    ..input()
                },
                now
            ),
            Err(ProductError::MissingName)
        );
        assert_eq!(
            Product::create(
                CreateProductInput {
                    price: dec!(-1),
                    ..input()
                },
                now
            ),
            Err(ProductError::NegativePrice(dec!(-1)))
        );
        assert_eq!(
            Product::create(
                CreateProductInput {
                    tax_rate: dec!(120),
                    ..input()
                },
                now
            ),
            Err(ProductError::InvalidTaxRate(dec!(120)))
        );
    }

    #[test]
    fn test_update_merges_fields() {
        let created = Utc::now();
        let mut product = Product::create(input(), created).unwrap();
        let later = created + Duration::minutes(1);

        product
            .apply_update(
                UpdateProductInput {
                    price: Some(dec!(175)),
                    tax_rate: Some(dec!(5.5)),
                    ..UpdateProductInput::default()
                },
                later,
            )
            .unwrap();

        assert_eq!(product.price, dec!(175));
        assert_eq!(product.tax_rate, dec!(5.5));
        assert_eq!(product.name, "Consultation stratégique");
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn test_invalid_update_is_rejected() {
        let mut product = Product::create(input(), Utc::now()).unwrap();
        let before = product.clone();

        let result = product.apply_update(
            UpdateProductInput {
                price: Some(dec!(-5)),
                ..UpdateProductInput::default()
            },
            Utc::now(),
        );

        assert!(result.is_err());
        assert_eq!(product, before);
    }

    #[test]
    fn test_unit_wire_names() {
        assert_eq!(serde_json::to_string(&ProductUnit::Hour).unwrap(), "\"heure\"");
        let unit: ProductUnit = serde_json::from_str("\"projet\"").unwrap();
        assert_eq!(unit, ProductUnit::Project);
    }
}
