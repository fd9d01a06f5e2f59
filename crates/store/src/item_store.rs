//! Concurrent in-memory repository for items.
//!
//! Items live in an insertion-ordered map keyed by id, guarded by a single
//! reader/writer lock. Reads hand out clones, so a returned snapshot is never
//! affected by later writes.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{TimeDelta, Utc};
use indexmap::map::Entry;
use indexmap::IndexMap;
use shelf_core::error::CoreError;
use shelf_core::types::{ItemId, Timestamp};

use crate::models::item::{CreateItem, Item, UpdateItem};

type ItemMap = IndexMap<ItemId, Item>;

/// Owns every item for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<ItemMap>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new item, stamping `created_at` and `updated_at`.
    ///
    /// Fails with [`CoreError::DuplicateId`] if the id is taken; the store is
    /// left unchanged in that case.
    pub fn create(&self, input: CreateItem) -> Result<Item, CoreError> {
        let mut items = self.write();
        match items.entry(input.id.clone()) {
            Entry::Occupied(_) => Err(CoreError::duplicate_item(input.id)),
            Entry::Vacant(slot) => {
                let item = slot.insert(Item::new(input, Utc::now()));
                tracing::debug!(item_id = %item.id, "Item inserted");
                Ok(item.clone())
            }
        }
    }

    /// Look up a single item by id.
    pub fn get(&self, id: &str) -> Result<Item, CoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::item_not_found(id))
    }

    /// Snapshot of every item in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.read().values().cloned().collect()
    }

    /// Replace the mutable fields of an existing item.
    ///
    /// The new `updated_at` is always strictly later than the previous one.
    pub fn update(&self, id: &str, changes: UpdateItem) -> Result<Item, CoreError> {
        let mut items = self.write();
        let item = items
            .get_mut(id)
            .ok_or_else(|| CoreError::item_not_found(id))?;

        let now = stamp_after(item.updated_at);
        item.apply(changes, now);
        tracing::debug!(item_id = %item.id, "Item updated");

        Ok(item.clone())
    }

    /// Remove an item permanently. Remaining items keep their order.
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let removed = self.write().shift_remove(id);
        match removed {
            Some(item) => {
                tracing::debug!(item_id = %item.id, "Item removed");
                Ok(())
            }
            None => Err(CoreError::item_not_found(id)),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No operation panics while holding the lock, so a poisoned guard still
    // protects a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, ItemMap> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ItemMap> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Current time, nudged forward if the clock has not advanced past `previous`.
fn stamp_after(previous: Timestamp) -> Timestamp {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
