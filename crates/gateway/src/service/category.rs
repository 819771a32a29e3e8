use crate::{
    abstract_trait::category::CategoryApiTrait,
    service::{
        list_query, measured,
        upstream::{RequestScope, UpstreamClient},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Method as HttpMethod;
use shared::domain::model::Category;
use shared::domain::requests::{CreateCategoryRequest, FindAllQuery, UpdateCategoryRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use shared::utils::{Method, Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CategoryHttpService {
    upstream: Arc<UpstreamClient>,
    metrics: Metrics,
}

impl CategoryHttpService {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        {
            let mut registry = registry.lock().await;
            registry.register(
                "category_api_client_requests",
                "Total number of category requests forwarded upstream",
                metrics.request_counter.clone(),
            );
            registry.register(
                "category_api_client_request_duration",
                "Histogram of category upstream request durations",
                metrics.request_duration.clone(),
            );
        }
        Self { upstream, metrics }
    }

    fn base_path(org_id: Uuid) -> String {
        format!("/api/v1/organizations/{org_id}/categories")
    }
}

#[async_trait]
impl CategoryApiTrait for CategoryHttpService {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Category>>, HttpError> {
        let path = Self::base_path(scope.require_org()?);
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get(&path, scope, &list_query(query)),
        )
        .await
    }

    async fn find_by_id(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<Category>, HttpError> {
        let path = format!("{}/{id}", Self::base_path(scope.require_org()?));
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get(&path, scope, &[]),
        )
        .await
    }

    async fn create(
        &self,
        scope: &RequestScope,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<Category>, HttpError> {
        let path = Self::base_path(scope.require_org()?);
        measured(
            &self.metrics,
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn update(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<Category>, HttpError> {
        let path = format!("{}/{id}", Self::base_path(scope.require_org()?));
        measured(
            &self.metrics,
            Method::Put,
            self.upstream.send(HttpMethod::PUT, &path, scope, Some(req)),
        )
        .await
    }

    async fn delete(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError> {
        let path = format!("{}/{id}", Self::base_path(scope.require_org()?));
        measured(
            &self.metrics,
            Method::Delete,
            self.upstream
                .send::<(), _>(HttpMethod::DELETE, &path, scope, None),
        )
        .await
    }
}
