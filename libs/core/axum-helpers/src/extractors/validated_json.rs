//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Malformed bodies and missing required fields are rejected with a 400
/// `INVALID_JSON` error; bodies that parse but fail `Validate` are rejected
/// with a 400 `VALIDATION_ERROR` carrying per-field details.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Greeting {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn greet(ValidatedJson(payload): ValidatedJson<Greeting>) -> String {
///     format!("Hello, {}", payload.name)
/// }
///
/// let app = Router::new().route("/greet", post(greet));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
