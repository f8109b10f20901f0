//! Shared types for the produce market.
//!
//! Identifier newtypes keep product ids, order ids, and plain integers from
//! being mixed up; [`Money`] keeps prices in integer cents while speaking
//! decimal on the wire.

pub mod types;

pub use types::{Money, OrderId, ProductId};
