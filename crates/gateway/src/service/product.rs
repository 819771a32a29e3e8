use crate::{
    abstract_trait::product::ProductApiTrait,
    service::{
        list_query, measured,
        upstream::{RequestScope, UpstreamClient},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Method as HttpMethod;
use shared::domain::model::{Product, Transaction};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, FindAllQuery, RestockRequest,
    UpdateProductRequest,
};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::{HttpError, UpstreamError};
use shared::utils::{Method, Metrics};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProductHttpService {
    upstream: Arc<UpstreamClient>,
    metrics: Metrics,
}

impl ProductHttpService {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        {
            let mut registry = registry.lock().await;
            registry.register(
                "product_api_client_requests",
                "Total number of product requests forwarded upstream",
                metrics.request_counter.clone(),
            );
            registry.register(
                "product_api_client_request_duration",
                "Histogram of product upstream request durations",
                metrics.request_duration.clone(),
            );
        }
        Self { upstream, metrics }
    }

    async fn measured<T>(
        &self,
        method: Method,
        fut: impl Future<Output = Result<ApiResponse<T>, UpstreamError>>,
    ) -> Result<ApiResponse<T>, HttpError> {
        measured(&self.metrics, method, fut).await
    }

    fn base_path(org_id: Uuid) -> String {
        format!("/api/v1/organizations/{org_id}/products")
    }
}

#[async_trait]
impl ProductApiTrait for ProductHttpService {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Product>>, HttpError> {
        let path = Self::base_path(scope.require_org()?);
        self.measured(
            Method::Get,
            self.upstream.get(&path, scope, &list_query(query)),
        )
        .await
    }

    async fn find_by_id(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<Product>, HttpError> {
        let path = format!("{}/{id}", Self::base_path(scope.require_org()?));
        self.measured(Method::Get, self.upstream.get(&path, scope, &[]))
            .await
    }

    async fn create(
        &self,
        scope: &RequestScope,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, HttpError> {
        let path = Self::base_path(scope.require_org()?);
        self.measured(
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn update(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, HttpError> {
        let path = format!("{}/{id}", Self::base_path(scope.require_org()?));
        self.measured(
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
        self.measured(
            Method::Delete,
            self.upstream
                .send::<(), _>(HttpMethod::DELETE, &path, scope, None),
        )
        .await
    }

    async fn check_out(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &CheckOutRequest,
    ) -> Result<ApiResponse<Transaction>, HttpError> {
        let path = format!("{}/{id}/check-out", Self::base_path(scope.require_org()?));
        self.measured(
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn check_in(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &CheckInRequest,
    ) -> Result<ApiResponse<Transaction>, HttpError> {
        let path = format!("{}/{id}/check-in", Self::base_path(scope.require_org()?));
        self.measured(
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn restock(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &RestockRequest,
    ) -> Result<ApiResponse<Product>, HttpError> {
        let path = format!("{}/{id}/restock", Self::base_path(scope.require_org()?));
        self.measured(
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn transactions(
        &self,
        scope: &RequestScope,
        id: Uuid,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Transaction>>, HttpError> {
        let path = format!("{}/{id}/transactions", Self::base_path(scope.require_org()?));
        self.measured(
            Method::Get,
            self.upstream.get(&path, scope, &list_query(query)),
        )
        .await
    }
}
