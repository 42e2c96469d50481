//! Extractors that turn axum's plain-text rejections into `AppError::Validation`,
//! so malformed bodies and ids get the same JSON 400 as missing fields.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path},
    http::{request::Parts, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for ValidJson<T>
where
    Json<T>: FromRequest<S, B, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
    B: Send + 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ValidJson(value))
    }
}

pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ValidPath(value))
    }
}
