//! Cart aggregation and checkout for the produce market.
//!
//! The cart is an ephemeral, client-held collection of catalog selections;
//! checkout turns validated buyer input plus the selections into creation
//! requests against the order store.

pub mod cart;
pub mod checkout;

pub use cart::{Cart, CartLine};
pub use checkout::{CheckoutError, Result, ShippingDetails, submit_cart, submit_single_order};
