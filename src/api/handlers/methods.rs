//! Fallbacks for disallowed HTTP methods.
//!
//! Attached per route so the 405 body names the one method the route accepts.

use crate::error::AppError;

pub async fn only_get() -> AppError {
    AppError::method_not_allowed("Only GET requests allowed")
}

pub async fn only_post() -> AppError {
    AppError::method_not_allowed("Only POST requests allowed")
}

pub async fn only_delete() -> AppError {
    AppError::method_not_allowed("Only DELETE requests allowed")
}
