//! HTTP client for task service requests.
//!
//! This module provides a thin wrapper over `reqwest` that builds endpoint
//! URLs, attaches JSON bodies and turns non-success responses into errors.

use super::error::RemoteError;
use log::*;
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Path prefix shared by every service endpoint.
///
const API_PREFIX: &str = "api";

/// Makes requests to the task service and conforms response data to models.
///
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Make a request without a body and decode the JSON response.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let response = self.call::<()>(Method::GET, path, None).await?;
        decode(response).await
    }

    /// Make a request with a JSON body and decode the JSON response.
    ///
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, RemoteError> {
        let response = self.call(method, path, Some(body)).await?;
        decode(response).await
    }

    /// Make a request whose response body is not needed.
    ///
    pub async fn execute(&self, method: Method, path: &str) -> Result<(), RemoteError> {
        self.call::<()>(method, path, None).await?;
        Ok(())
    }

    /// Make request and return the response if its status is a success.
    ///
    async fn call<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, RemoteError> {
        let request_url = format!("{}/{}/{}", self.base_url, API_PREFIX, path);
        debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            // `json` also sets `Content-Type: application/json`
            request = request.json(body);
        }

        checked(request.send().await?).await
    }
}

/// Convert a non-success response into an API error carrying the service's
/// message.
///
async fn checked(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("Unable to read response"));
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if text.is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => text,
    };
    error!("Request failed with status {}: {}", status, message);
    Err(RemoteError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Read the whole body and deserialize it, keeping the raw text around for
/// diagnostics.
///
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice::<T>(&bytes).map_err(|e| {
        error!(
            "Failed to deserialize response: {}. Response body: {}",
            e,
            String::from_utf8_lossy(&bytes)
        );
        RemoteError::Deserialization(e)
    })
}
