//! Fallbacks for requests the route table does not cover.

use crate::error::AppError;

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
