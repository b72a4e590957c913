//! FDC HTTP client
//!
//! Builds and issues single requests against the FoodData Central API,
//! attaching the credential and default headers, and normalizing HTTP and
//! transport failures into [`FdcError`]. One attempt per call: no retries,
//! no backoff, no caching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::FdcConfig;
use crate::fdc::FdcError;
use crate::models::{FoodRecord, FoodsRequest, SearchRequest, SearchResponse};

/// Identification header sent on every request
const CLIENT_USER_AGENT: &str = "usda-fdc-mcp/1.0";

/// Fixed per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP methods the FDC API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Typed access to the FDC endpoints the tools need.
///
/// Handlers depend on this trait rather than on [`FdcClient`] directly so
/// tests can substitute a mock and assert on call counts.
#[async_trait]
pub trait FdcApi: Send + Sync {
    /// POST foods/search
    async fn search_foods(&self, request: &SearchRequest) -> Result<SearchResponse, FdcError>;

    /// GET food/{id}, optionally filtered to specific nutrient ids
    async fn get_food(
        &self,
        fdc_id: i64,
        nutrient_ids: Option<&[i64]>,
    ) -> Result<FoodRecord, FdcError>;

    /// POST foods (multi-food lookup for comparison)
    async fn get_foods(&self, request: &FoodsRequest) -> Result<Vec<FoodRecord>, FdcError>;
}

/// FoodData Central API client
pub struct FdcClient {
    config: FdcConfig,
    http: reqwest::Client,
}

impl FdcClient {
    /// Create a client for the given configuration
    pub fn new(config: FdcConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Issue one request and decode the JSON response body into `T`.
    ///
    /// The credential check happens before any network I/O: without an API
    /// key the call short-circuits with [`FdcError::MissingApiKey`]. The key
    /// is always injected as the `api_key` query parameter. GET sends query
    /// parameters only; POST additionally sends `body` as JSON.
    pub async fn request<T, B>(
        &self,
        endpoint: &str,
        method: Method,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, FdcError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(FdcError::MissingApiKey)?;

        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        tracing::debug!(%url, ?method, "FDC request");

        let mut builder = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };

        builder = builder
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .timeout(REQUEST_TIMEOUT)
            .query(&[("api_key", api_key)])
            .query(query);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "FDC request failed");
            return Err(FdcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FdcError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FdcApi for FdcClient {
    async fn search_foods(&self, request: &SearchRequest) -> Result<SearchResponse, FdcError> {
        self.request("foods/search", Method::Post, &[], Some(request))
            .await
    }

    async fn get_food(
        &self,
        fdc_id: i64,
        nutrient_ids: Option<&[i64]>,
    ) -> Result<FoodRecord, FdcError> {
        let endpoint = format!("food/{fdc_id}");
        let mut query = Vec::new();
        if let Some(ids) = nutrient_ids {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("nutrients", joined));
        }
        self.request(&endpoint, Method::Get, &query, None::<&()>)
            .await
    }

    async fn get_foods(&self, request: &FoodsRequest) -> Result<Vec<FoodRecord>, FdcError> {
        self.request("foods", Method::Post, &[], Some(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Without a credential the client must fail before any network I/O.
    /// The base URL points at an unroutable address so an accidental request
    /// would surface as a transport error instead.
    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        let config = FdcConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
        };
        let client = FdcClient::new(config);

        let result = client.get_food(171688, None).await;
        match result {
            Err(FdcError::MissingApiKey) => {}
            other => panic!("expected MissingApiKey, got {other:?}"),
        }

        let request = SearchRequest {
            query: "apple".to_string(),
            page_size: 10,
            page_number: 1,
            data_type: None,
        };
        assert!(matches!(
            client.search_foods(&request).await,
            Err(FdcError::MissingApiKey)
        ));
    }
}
