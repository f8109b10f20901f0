//! Product record and input validation.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, never reused while the store lives.
    pub id: ProductId,

    /// Human-readable product name.
    pub name: String,

    /// Price for one unit.
    pub price_per_unit: Money,

    /// Optional image URL for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input for creating a product; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price_per_unit: Money,
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Creates a new product input without an image.
    pub fn new(name: impl Into<String>, price_per_unit: Money) -> Self {
        Self {
            name: name.into(),
            price_per_unit,
            image_url: None,
        }
    }

    /// Attaches an image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_price(self.price_per_unit)
    }
}

/// Partial update for a product; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price_per_unit: Option<Money>,
    pub image_url: Option<String>,
}

impl ProductUpdate {
    /// Creates an empty update (a no-op merge).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new unit price.
    pub fn price_per_unit(mut self, price: Money) -> Self {
        self.price_per_unit = Some(price);
        self
    }

    /// Sets the new image URL.
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price_per_unit {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Merges the supplied fields over an existing record.
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price_per_unit {
            product.price_per_unit = price;
        }
        if let Some(url) = self.image_url {
            product.image_url = Some(url);
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }
    Ok(())
}

fn validate_price(price: Money) -> Result<()> {
    if !price.is_positive() {
        return Err(CatalogError::InvalidPrice { price });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_rejects_empty_name() {
        let input = NewProduct::new("   ", Money::from_cents(100));
        assert!(matches!(input.validate(), Err(CatalogError::EmptyName)));
    }

    #[test]
    fn new_product_rejects_non_positive_price() {
        let input = NewProduct::new("Kale", Money::zero());
        assert!(matches!(
            input.validate(),
            Err(CatalogError::InvalidPrice { .. })
        ));

        let input = NewProduct::new("Kale", Money::from_cents(-50));
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        // An empty update is always valid
        assert!(ProductUpdate::new().validate().is_ok());

        let update = ProductUpdate::new().name("");
        assert!(matches!(update.validate(), Err(CatalogError::EmptyName)));

        let update = ProductUpdate::new().price_per_unit(Money::zero());
        assert!(update.validate().is_err());
    }

    #[test]
    fn update_apply_merges_over_existing_record() {
        let mut product = Product {
            id: ProductId::new(1),
            name: "Kale".to_string(),
            price_per_unit: Money::from_cents(250),
            image_url: None,
        };

        ProductUpdate::new()
            .price_per_unit(Money::from_cents(299))
            .apply(&mut product);

        assert_eq!(product.name, "Kale");
        assert_eq!(product.price_per_unit.cents(), 299);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let product = Product {
            id: ProductId::new(1),
            name: "Kale".to_string(),
            price_per_unit: Money::from_cents(250),
            image_url: Some("https://example.com/kale.jpg".to_string()),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["pricePerUnit"], 2.5);
        assert_eq!(json["imageUrl"], "https://example.com/kale.jpg");
    }

    #[test]
    fn product_omits_missing_image_url() {
        let product = Product {
            id: ProductId::new(2),
            name: "Tomatoes".to_string(),
            price_per_unit: Money::from_cents(199),
            image_url: None,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("imageUrl").is_none());
    }
}
