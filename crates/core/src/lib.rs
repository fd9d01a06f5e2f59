//! Shared building blocks for the shelf workspace: identifier and
//! timestamp aliases plus the domain error type.

pub mod error;
pub mod types;
