pub mod channel;
pub mod insights;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure surface of both backend services, rendered inline by the
/// pages. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: HTTP {status} - {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Decodes a 2xx response as JSON; anything else becomes `ApiError::Http`
/// carrying whatever body text the service sent.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http { status, body })
    }
}
