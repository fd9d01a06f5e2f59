//! Item entity model and DTOs.
//!
//! The display name travels as `item_name` on the wire; `name` is accepted
//! as an input alias. Empty optional fields are omitted from JSON output.

use serde::{Deserialize, Deserializer, Serialize};
use shelf_core::types::{ItemId, Timestamp};
use validator::Validate;

/// A stored product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jan_code: Option<String>,
    #[serde(
        rename = "item_name",
        alias = "name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub discontinued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Never set; deletion removes the record outright.
    #[serde(default)]
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating an item. The caller chooses the id.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: ItemId,
    pub jan_code: Option<String>,
    #[serde(rename = "item_name", alias = "name")]
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category_id: Option<i64>,
    pub series_id: Option<i64>,
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub discontinued: bool,
    pub release_date: Option<Timestamp>,
}

/// DTO for updating an item.
///
/// Replaces every mutable field: an omitted optional field clears the
/// stored value and an omitted `discontinued` resets it to `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub jan_code: Option<String>,
    #[serde(rename = "item_name", alias = "name")]
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category_id: Option<i64>,
    pub series_id: Option<i64>,
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub discontinued: bool,
    pub release_date: Option<Timestamp>,
}

/// Reads an explicit `null` the same as an omitted flag.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Item {
    /// Build a fresh record with `created_at == updated_at == now`.
    pub fn new(input: CreateItem, now: Timestamp) -> Self {
        Self {
            id: input.id,
            jan_code: input.jan_code,
            name: input.name,
            price: input.price,
            category_id: input.category_id,
            series_id: input.series_id,
            stock: input.stock,
            discontinued: input.discontinued,
            release_date: input.release_date,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Overwrite the mutable fields and stamp `updated_at`.
    ///
    /// `id`, `created_at` and `deleted_at` are left untouched.
    pub fn apply(&mut self, changes: UpdateItem, now: Timestamp) {
        self.jan_code = changes.jan_code;
        self.name = changes.name;
        self.price = changes.price;
        self.category_id = changes.category_id;
        self.series_id = changes.series_id;
        self.stock = changes.stock;
        self.discontinued = changes.discontinued;
        self.release_date = changes.release_date;
        self.updated_at = now;
    }
}
