use crate::types::ItemId;

/// Domain-level failures shared by the store and the HTTP layer.
///
/// The item store only ever produces [`CoreError::NotFound`] and
/// [`CoreError::DuplicateId`]; `Validation` originates in request decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: ItemId },

    #[error("Duplicate id: {entity} with id {id} already exists")]
    DuplicateId { entity: &'static str, id: ItemId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing item.
    pub fn item_not_found(id: impl Into<ItemId>) -> Self {
        CoreError::NotFound {
            entity: "Item",
            id: id.into(),
        }
    }

    /// Shorthand for an item id that is already taken.
    pub fn duplicate_item(id: impl Into<ItemId>) -> Self {
        CoreError::DuplicateId {
            entity: "Item",
            id: id.into(),
        }
    }
}
