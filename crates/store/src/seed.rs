//! Demo catalogue loaded at startup when `SEED_DEMO_ITEMS` is enabled.

use chrono::Utc;
use shelf_core::error::CoreError;
use shelf_core::types::Timestamp;

use crate::item_store::ItemStore;
use crate::models::item::CreateItem;

/// The two demo products, released at `release_date`.
pub fn demo_items(release_date: Timestamp) -> Vec<CreateItem> {
    vec![
        CreateItem {
            id: "1".into(),
            jan_code: Some("327390283080".into()),
            name: Some("item_1".into()),
            price: Some(2500),
            category_id: Some(1),
            series_id: Some(1),
            stock: Some(100),
            discontinued: false,
            release_date: Some(release_date),
        },
        CreateItem {
            id: "2".into(),
            jan_code: Some("3273902878656".into()),
            name: Some("item_2".into()),
            price: Some(1200),
            category_id: Some(2),
            series_id: Some(2),
            stock: Some(200),
            discontinued: false,
            release_date: Some(release_date),
        },
    ]
}

/// Insert the demo products through the regular create path.
///
/// Returns the number of items inserted. Fails on the first id that is
/// already present.
pub fn seed_demo_items(store: &ItemStore) -> Result<usize, CoreError> {
    let items = demo_items(Utc::now());
    let count = items.len();
    for item in items {
        store.create(item)?;
    }
    tracing::info!(count, "Seeded demo items");
    Ok(count)
}
