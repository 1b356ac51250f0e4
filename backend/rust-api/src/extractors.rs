use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Custom JSON extractor that returns JSON error responses instead of HTML
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                let message = format!("Failed to parse JSON request body: {}", rejection);
                tracing::warn!("{}", message);
                let error_response = json!({
                    "message": message,
                    "status": 400
                });
                Err((StatusCode::BAD_REQUEST, Json(error_response)).into_response())
            }
        }
    }
}

pub const CLIENT_ID_HEADER: &str = "x-client-id";
const DEFAULT_CLIENT_ID: &str = "local";

/// Identifies the browser tab/device whose state a request touches. Requests
/// without the header share the `local` client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(pub String);

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(CLIENT_ID_HEADER) else {
            return Ok(ClientId(DEFAULT_CLIENT_ID.to_string()));
        };

        let id = value
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= 128)
            .ok_or_else(|| {
                let error_response = json!({
                    "message": format!("Invalid {} header", CLIENT_ID_HEADER),
                    "status": 400
                });
                (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
            })?;

        Ok(ClientId(id.to_string()))
    }
}
