//! JSON body extractor whose rejections use the shared error body.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] in request position.
///
/// A missing content type, malformed JSON or a body that does not fit `T`
/// is answered with `{"message": ...}` and the status axum picked for the
/// rejection (415, 400 or 422).
///
/// ```ignore
/// async fn create(AppJson(payload): AppJson<ProductRequest>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
