//! HTTP calls to the backend function host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Network`], since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is one-shot with no retry. POST responses are decoded regardless
//! of HTTP status because the service reports rejections in a JSON body with an
//! optional `message`; only the board listing treats a non-2xx status as failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::Endpoints;

#[cfg(feature = "hydrate")]
use super::types::{BoardListResponse, CreateBoardResponse, CreatePinResponse, ParseRequest, ParseResponse, TokenRequest, TokenResponse};
use super::types::{CreateBoardRequest, CreatePinRequest, CreatedBoard, ParsedProduct, RemoteBoard};

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable JSON body.
    #[error("{0}")]
    Network(String),

    /// The service answered without its success marker.
    #[error("rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn board_list_failed_message(status: u16) -> String {
    format!("board list failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Exchange an authorization code for an access token.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on fetch failure or a non-JSON body, and
/// [`ApiError::Rejected`] when the response has no `access_token`.
pub async fn exchange_token(endpoints: &Endpoints, code: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = TokenRequest { code: code.to_owned() };
        let resp = gloo_net::http::Request::post(&endpoints.token)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: TokenResponse = resp.json().await.map_err(network)?;
        body.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, code);
        Err(unavailable())
    }
}

/// Fetch the remote board list through the proxy.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on fetch failure, a non-2xx status, or a
/// malformed body.
pub async fn fetch_boards(endpoints: &Endpoints, token: &str) -> Result<Vec<RemoteBoard>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoints.boards_list())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Network(board_list_failed_message(resp.status())));
        }
        let body: BoardListResponse = resp.json().await.map_err(network)?;
        Ok(body.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token);
        Err(unavailable())
    }
}

/// Create a board.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on fetch failure or a non-JSON body, and
/// [`ApiError::Rejected`] when the response has no `id`.
pub async fn create_board(
    endpoints: &Endpoints,
    token: &str,
    request: &CreateBoardRequest,
) -> Result<CreatedBoard, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoints.create_board)
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: CreateBoardResponse = resp.json().await.map_err(network)?;
        body.into_result(&request.name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token, request);
        Err(unavailable())
    }
}

/// Create a pin and return its id.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on fetch failure or a non-JSON body, and
/// [`ApiError::Rejected`] when the response has no `id`.
pub async fn create_pin(endpoints: &Endpoints, token: &str, request: &CreatePinRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoints.create_pin)
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: CreatePinResponse = resp.json().await.map_err(network)?;
        body.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, token, request);
        Err(unavailable())
    }
}

/// Scrape product metadata from a shop page.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on fetch failure or a non-JSON body, and
/// [`ApiError::Rejected`] when `success` is false.
pub async fn parse_product(endpoints: &Endpoints, url: &str) -> Result<ParsedProduct, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ParseRequest { url: url.to_owned() };
        let resp = gloo_net::http::Request::post(&endpoints.parse_product)
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let body: ParseResponse = resp.json().await.map_err(network)?;
        body.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoints, url);
        Err(unavailable())
    }
}
