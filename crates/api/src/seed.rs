//! Fixed demonstration data installed at process start.
//!
//! The canonical state is in-memory and resets on restart, so every start
//! gets the same demonstration set back.

use catalog::{NewProduct, ProductCatalogStore};
use common::{Money, ProductId};
use orders::{NewOrder, OrderStatus, OrderStore};

/// Seeds the demonstration catalog and orders into empty stores.
pub async fn seed_demo_data(catalog: &ProductCatalogStore, orders: &OrderStore) {
    for input in demo_products() {
        catalog.create(input).await.expect("failed to seed product");
    }

    let delivered = orders
        .create(NewOrder::new(
            ProductId::new(1),
            10,
            "John Doe",
            "john@example.com",
            "123 Main St, City",
        ))
        .await
        .expect("failed to seed order");
    orders
        .update_status(delivered.order.id, OrderStatus::Delivered)
        .await
        .expect("failed to seed order status");

    let in_progress = orders
        .create(NewOrder::new(
            ProductId::new(3),
            5,
            "Jane Smith",
            "555-123-4567",
            "456 Elm St, Town",
        ))
        .await
        .expect("failed to seed order");
    orders
        .update_status(in_progress.order.id, OrderStatus::InProgress)
        .await
        .expect("failed to seed order status");

    orders
        .create(NewOrder::new(
            ProductId::new(2),
            20,
            "Restaurant Supplies Inc",
            "orders@restaurant-supplies.com",
            "789 Oak Dr, Village",
        ))
        .await
        .expect("failed to seed order");
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Organic Apples", Money::from_cents(299))
            .with_image_url("https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6"),
        NewProduct::new("Fresh Tomatoes", Money::from_cents(199))
            .with_image_url("https://images.unsplash.com/photo-1607305387299-a3d9611cd469"),
        NewProduct::new("Potatoes (5kg)", Money::from_cents(450))
            .with_image_url("https://images.unsplash.com/photo-1518977676601-b53f82aba655"),
        NewProduct::new("Sweet Oranges", Money::from_cents(349))
            .with_image_url("https://images.unsplash.com/photo-1582979512210-99b6a53386f9"),
        NewProduct::new("Ripe Bananas", Money::from_cents(179))
            .with_image_url("https://images.unsplash.com/photo-1566393028639-d108a42c46a7"),
        NewProduct::new("Red Onions (3kg)", Money::from_cents(399))
            .with_image_url("https://images.unsplash.com/photo-1620574387735-3624d75b5fcc"),
    ]
}
