use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    /// A business rule was broken; the payload is the rule message
    #[error("{0}")]
    Validation(String),

    #[error("record not found")]
    NotFound(String),

    #[error("duplicated sku")]
    DuplicateSku(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::Validation(_) => AppError::UnprocessableEntity(message),
            ProductError::NotFound(_) => AppError::NotFound(message),
            ProductError::DuplicateSku(_) => AppError::Conflict(message),
            ProductError::Database(_) | ProductError::Internal(_) => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
