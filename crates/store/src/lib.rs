//! In-memory item repository.
//!
//! [`ItemStore`] owns every [`Item`](models::item::Item) for the lifetime of
//! the process. It is synchronous, `Send + Sync`, and meant to be shared
//! behind an `Arc` by the HTTP layer.

pub mod item_store;
pub mod models;
pub mod seed;

pub use item_store::ItemStore;
