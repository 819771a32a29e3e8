use crate::service::upstream::RequestScope;
use async_trait::async_trait;
use shared::domain::model::{Invitation, User};
use shared::domain::requests::{FindAllQuery, InviteUserRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserApi = Arc<dyn UserApiTrait + Send + Sync>;

#[async_trait]
pub trait UserApiTrait {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<User>>, HttpError>;

    async fn find_by_id(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<User>, HttpError>;

    async fn find_invitations(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Invitation>>, HttpError>;

    async fn invite(
        &self,
        scope: &RequestScope,
        req: &InviteUserRequest,
    ) -> Result<ApiResponse<Invitation>, HttpError>;

    async fn revoke_invitation(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError>;
}
