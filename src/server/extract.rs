//! Request-body extraction for the POST endpoints.

use async_trait::async_trait;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extracts `T` from a JSON or form-encoded request body, keyed on the
/// `Content-Type` header. The contact form posts either encoding depending
/// on whether it is submitted via fetch or as a plain HTML form.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|err| ApiError::Internal(format!("malformed JSON body: {}", err)))?;
            return Ok(Self(payload));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(req, state)
                .await
                .map_err(|err| ApiError::Internal(format!("malformed form body: {}", err)))?;
            return Ok(Self(payload));
        }

        Err(ApiError::Internal(format!(
            "unsupported content type '{}'",
            content_type
        )))
    }
}
