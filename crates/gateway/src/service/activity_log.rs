use crate::{
    abstract_trait::activity_log::ActivityLogApiTrait,
    service::{
        list_query, measured,
        upstream::{RequestScope, UpstreamClient},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::domain::model::ActivityLog;
use shared::domain::requests::FindAllQuery;
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use shared::utils::{Method, Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct ActivityLogHttpService {
    upstream: Arc<UpstreamClient>,
    metrics: Metrics,
}

impl ActivityLogHttpService {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        {
            let mut registry = registry.lock().await;
            registry.register(
                "activity_log_api_client_requests",
                "Total number of activity log requests forwarded upstream",
                metrics.request_counter.clone(),
            );
            registry.register(
                "activity_log_api_client_request_duration",
                "Histogram of activity log upstream request durations",
                metrics.request_duration.clone(),
            );
        }
        Self { upstream, metrics }
    }
}

#[async_trait]
impl ActivityLogApiTrait for ActivityLogHttpService {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<ActivityLog>>, HttpError> {
        let org_id = scope.require_org()?;
        let path = format!("/api/v1/organizations/{org_id}/activity-logs");
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get(&path, scope, &list_query(query)),
        )
        .await
    }
}
