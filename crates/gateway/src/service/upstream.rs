use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use shared::domain::responses::ApiResponse;
use shared::errors::{HttpError, UpstreamError};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Per-request forwarding context assembled by the middleware layer.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    pub organization_id: Option<Uuid>,
    pub bearer_token: Option<String>,
}

impl RequestScope {
    pub fn for_org(organization_id: Uuid, bearer_token: impl Into<String>) -> Self {
        Self {
            organization_id: Some(organization_id),
            bearer_token: Some(bearer_token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(bearer_token: impl Into<String>) -> Self {
        Self {
            organization_id: None,
            bearer_token: Some(bearer_token.into()),
        }
    }

    pub fn require_org(&self) -> Result<Uuid, HttpError> {
        self.organization_id
            .ok_or_else(|| HttpError::BadRequest("Missing organization scope".to_string()))
    }
}

/// Body shape every upstream endpoint answers with; `status_code` inside
/// the body is ignored in favor of the transport status, which is the one
/// canonical success predicate.
#[derive(Debug, Deserialize)]
struct UpstreamEnvelope<T> {
    #[serde(default)]
    message: Option<String>,
    data: T,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The single typed upstream-call helper all resource services go
/// through: one attempt, organization header, bearer forwarding, and
/// envelope normalization in one place.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: &RequestScope,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, UpstreamError> {
        self.request::<(), T>(Method::GET, path, scope, query, None)
            .await
    }

    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        scope: &RequestScope,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, UpstreamError> {
        self.request(method, path, scope, &[], body).await
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        scope: &RequestScope,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, UpstreamError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "forwarding to inventory service");

        let mut builder = self.http.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(org_id) = scope.organization_id {
            builder = builder.header("x-organization-id", org_id.to_string());
        }
        if let Some(token) = &scope.bearer_token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();

        if !response.status().is_success() {
            let message = match response.json::<UpstreamErrorBody>().await {
                Ok(body) => body
                    .message
                    .unwrap_or_else(|| format!("upstream request failed with status {code}")),
                Err(_) => format!("upstream request failed with status {code}"),
            };
            return Err(UpstreamError::Status { code, message });
        }

        let envelope = response
            .json::<UpstreamEnvelope<T>>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(ApiResponse::success(
            envelope.message.unwrap_or_else(|| "OK".to_string()),
            envelope.data,
            code,
        ))
    }
}
