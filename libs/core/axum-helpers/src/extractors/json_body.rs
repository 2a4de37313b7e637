//! JSON body extractor with uniform `400 Bad Request` rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections are always client errors.
///
/// axum's own `Json` answers `422` for well-formed JSON of the wrong shape and
/// `415` for a missing content type. This wrapper reports all of them as
/// `400` with the standard error body, before any handler logic runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateProduct {
///     name: Option<String>,
/// }
///
/// async fn create(JsonBody(payload): JsonBody<CreateProduct>) -> String {
///     format!("Creating: {:?}", payload.name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
