//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use shared::response::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// Name of the auth token header expected by the API
const AUTH_HEADER: &str = "x-auth";

/// HTTP client for making network requests to the back-office API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the auth token in place (after login/logout)
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authed(self.client.get(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self
            .authed(self.client.get(self.url(path)).query(query))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authed(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authed(self.client.post(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authed(self.client.patch(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request without body
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authed(self.client.patch(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .authed(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.authed(self.client.delete(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            debug!(%status, body = %text, "request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the API's `{success, data}` envelope
    ///
    /// The server flags business failures with `success=false` on HTTP 200;
    /// those surface as [`ClientError::Api`].
    pub(crate) fn unwrap_envelope<T>(response: ApiResponse<T>) -> ClientResult<T> {
        if !response.success {
            return Err(ClientError::Api(
                response
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_normalizes_slashes() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.url("/orders"), "http://localhost:3000/orders");
        assert_eq!(client.url("orders"), "http://localhost:3000/orders");
    }

    #[test]
    fn test_unwrap_envelope_maps_failure_flag() {
        let ok = ApiResponse::ok(7);
        assert_eq!(HttpClient::unwrap_envelope(ok).unwrap(), 7);

        let failed = ApiResponse::<i32>::error("order not found");
        match HttpClient::unwrap_envelope(failed) {
            Err(ClientError::Api(message)) => assert_eq!(message, "order not found"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }

        let empty = ApiResponse::<i32> {
            success: true,
            data: None,
            message: None,
        };
        assert!(matches!(
            HttpClient::unwrap_envelope(empty),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
