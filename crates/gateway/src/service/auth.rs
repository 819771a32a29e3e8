use crate::{
    abstract_trait::auth::AuthApiTrait,
    service::{
        measured,
        upstream::{RequestScope, UpstreamClient},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Method as HttpMethod;
use shared::domain::model::User;
use shared::domain::requests::{LoginRequest, RegisterRequest};
use shared::domain::responses::ApiResponse;
use shared::errors::HttpError;
use shared::utils::{Method, Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct AuthHttpService {
    upstream: Arc<UpstreamClient>,
    metrics: Metrics,
}

impl AuthHttpService {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        {
            let mut registry = registry.lock().await;
            registry.register(
                "auth_api_client_requests",
                "Total number of auth requests forwarded upstream",
                metrics.request_counter.clone(),
            );
            registry.register(
                "auth_api_client_request_duration",
                "Histogram of auth upstream request durations",
                metrics.request_duration.clone(),
            );
        }
        Self { upstream, metrics }
    }
}

#[async_trait]
impl AuthApiTrait for AuthHttpService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<serde_json::Value>, HttpError> {
        measured(
            &self.metrics,
            Method::Post,
            self.upstream.send(
                HttpMethod::POST,
                "/api/v1/auth/login",
                &RequestScope::anonymous(),
                Some(req),
            ),
        )
        .await
    }

    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError> {
        measured(
            &self.metrics,
            Method::Post,
            self.upstream.send(
                HttpMethod::POST,
                "/api/v1/auth/register",
                &RequestScope::anonymous(),
                Some(req),
            ),
        )
        .await
    }

    async fn me(&self, scope: &RequestScope) -> Result<ApiResponse<User>, HttpError> {
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get("/api/v1/auth/me", scope, &[]),
        )
        .await
    }
}
