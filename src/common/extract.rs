// src/common/extract.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::common::error::ApiError;

// Extratores que rejeitam com o nosso ApiError (INVALID_ARGUMENT) em vez do
// texto puro que o axum devolve por padrão.

/// Corpo JSON.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Parâmetros do caminho (`/{id}`).
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// Query string.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_argument(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_argument(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::invalid_argument(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Code;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        #[allow(dead_code)]
        filial_id: uuid::Uuid,
    }

    #[tokio::test]
    async fn missing_json_field_is_invalid_argument() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Store A"}"#))
            .expect("request");

        let err = ApiJson::<Payload>::from_request(req, &()).await.unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
        assert!(err.message.contains("filialId"));
    }

    #[tokio::test]
    async fn bad_query_value_is_invalid_argument() {
        #[derive(Debug, Deserialize)]
        struct Paging {
            #[allow(dead_code)]
            limit: Option<i64>,
        }

        let (mut parts, _) = Request::builder()
            .uri("/?limit=abc")
            .body(Body::empty())
            .expect("request")
            .into_parts();

        let err = ApiQuery::<Paging>::from_request_parts(&mut parts, &()).await.unwrap_err();

        assert_eq!(err.code, Code::InvalidArgument);
    }
}
