// src/core/service_client.rs
//! Shared HTTP plumbing for the job, utils and user services

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, error, trace};

use super::error::{ClientError, ClientResult};
use crate::types::ErrorBody;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(base_url: &str, token: Option<String>, timeout_seconds: u64) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Config("base url is empty".to_string()));
        }

        let timeout = if timeout_seconds == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_seconds
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::GET, endpoint, None::<&()>, false).await
    }

    /// GET request carrying the bearer token
    pub async fn get_authorized<R>(&self, endpoint: &str) -> ClientResult<R>
    where
        R: DeserializeOwned,
    {
        self.send(Method::GET, endpoint, None::<&()>, true).await
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> ClientResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(payload), false).await
    }

    pub async fn post_json_authorized<T, R>(&self, endpoint: &str, payload: &T) -> ClientResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(payload), true).await
    }

    pub async fn put_json_authorized<T, R>(&self, endpoint: &str, payload: &T) -> ClientResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, Some(payload), true).await
    }

    async fn send<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&T>,
        authorized: bool,
    ) -> ClientResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);

        if authorized {
            let token = self.token.as_deref().ok_or_else(|| {
                ClientError::Unauthorized(Some("No auth token configured".to_string()))
            })?;
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, url, e);
            ClientError::from(e)
        })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            response
                .json::<R>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("{} {} returned {}: {}", method, url, status, error_text);
            Err(ClientError::from_status(
                status.as_u16(),
                Self::extract_message(status, &error_text),
            ))
        }
    }

    fn extract_message(status: StatusCode, body: &str) -> Option<String> {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Some(parsed.message),
            Err(_) => {
                trace!("Error body for {} is not JSON", status);
                None
            }
        }
    }
}
