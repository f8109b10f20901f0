//! Order store for the produce market.
//!
//! Owns the set of placed orders and their status lifecycle. Depends on the
//! catalog to validate product references at creation time and to enrich
//! query results with a product snapshot at read time.

pub mod error;
pub mod order;
pub mod status;
pub mod store;

pub use error::{OrderError, Result};
pub use order::{EnrichedOrder, NewOrder, Order};
pub use status::OrderStatus;
pub use store::OrderStore;
