use super::validated;
use crate::{error, Error};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        debug!("rejected json body: {rejection}");

        match rejection {
            JsonRejection::JsonDataError(_) => error::JSON_MISSING_FIELDS,
            JsonRejection::JsonSyntaxError(_) => error::JSON_SYNTAX_ERROR,
            JsonRejection::MissingJsonContentType(_) => error::JSON_CONTENT_TYPE,
            _ => error::INTERNAL,
        }
    }
}

/// JSON body whose rejections render as the service's error body.
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        validated(value, error::JSON_VALIDATE_INVALID).map(Self)
    }
}
