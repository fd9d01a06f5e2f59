//! Request handlers.
//!
//! Handlers delegate to the shared [`ItemStore`](shelf_store::ItemStore)
//! and map failures via [`AppError`](crate::error::AppError).

pub mod item;
