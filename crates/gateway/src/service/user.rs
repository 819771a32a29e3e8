use crate::{
    abstract_trait::user::UserApiTrait,
    service::{
        list_query, measured,
        upstream::{RequestScope, UpstreamClient},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Method as HttpMethod;
use shared::domain::model::{Invitation, User};
use shared::domain::requests::{FindAllQuery, InviteUserRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use shared::utils::{Method, Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserHttpService {
    upstream: Arc<UpstreamClient>,
    metrics: Metrics,
}

impl UserHttpService {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        {
            let mut registry = registry.lock().await;
            registry.register(
                "user_api_client_requests",
                "Total number of user and invitation requests forwarded upstream",
                metrics.request_counter.clone(),
            );
            registry.register(
                "user_api_client_request_duration",
                "Histogram of user upstream request durations",
                metrics.request_duration.clone(),
            );
        }
        Self { upstream, metrics }
    }

    fn users_path(org_id: Uuid) -> String {
        format!("/api/v1/organizations/{org_id}/users")
    }

    fn invitations_path(org_id: Uuid) -> String {
        format!("/api/v1/organizations/{org_id}/invitations")
    }
}

#[async_trait]
impl UserApiTrait for UserHttpService {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<User>>, HttpError> {
        let path = Self::users_path(scope.require_org()?);
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
    ) -> Result<ApiResponse<User>, HttpError> {
        let path = format!("{}/{id}", Self::users_path(scope.require_org()?));
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get(&path, scope, &[]),
        )
        .await
    }

    async fn find_invitations(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Invitation>>, HttpError> {
        let path = Self::invitations_path(scope.require_org()?);
        measured(
            &self.metrics,
            Method::Get,
            self.upstream.get(&path, scope, &list_query(query)),
        )
        .await
    }

    async fn invite(
        &self,
        scope: &RequestScope,
        req: &InviteUserRequest,
    ) -> Result<ApiResponse<Invitation>, HttpError> {
        let path = Self::invitations_path(scope.require_org()?);
        measured(
            &self.metrics,
            Method::Post,
            self.upstream.send(HttpMethod::POST, &path, scope, Some(req)),
        )
        .await
    }

    async fn revoke_invitation(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError> {
        let path = format!("{}/{id}", Self::invitations_path(scope.require_org()?));
        measured(
            &self.metrics,
            Method::Delete,
            self.upstream
                .send::<(), _>(HttpMethod::DELETE, &path, scope, None),
        )
        .await
    }
}
