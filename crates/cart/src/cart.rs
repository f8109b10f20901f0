//! Client-held cart aggregating catalog selections.

use catalog::Product;
use common::{Money, ProductId};

/// One product's selected quantity, with display fields copied from the
/// product at the time it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price_per_unit: Money,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Returns the line total (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.price_per_unit.multiply(self.quantity)
    }
}

/// Ephemeral, session-local collection of selected products.
///
/// Holds at most one line per product id. Lines live until checkout
/// succeeds, the cart is cleared, or their quantity reaches zero. The cart
/// never mutates the catalog; it only copies product fields for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart. An existing line for the same product
    /// has its quantity increased by the delta; otherwise a new line is
    /// appended with the product's display fields copied in.
    pub fn add_item(&mut self, product: &Product, quantity_delta: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity_delta;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price_per_unit: product.price_per_unit,
            image_url: product.image_url.clone(),
            quantity: quantity_delta,
        });
    }

    /// Sets a line's quantity; zero removes the line entirely. No-op when
    /// no line exists for the product.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: u32) {
        if new_quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = new_quantity;
        }
    }

    /// Removes the line for the product if present; no-op otherwise.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of unit price times quantity over all lines, exact in cents.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (the cart-size indicator).
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns true when the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
