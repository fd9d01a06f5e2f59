//! Request extractors with JSON error rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// A missing content type, a syntax error or a type mismatch in the body is
/// rejected as [`AppError::BadRequest`], so clients get the standard
/// `{ "error", "code" }` envelope instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
