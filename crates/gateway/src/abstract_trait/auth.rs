use crate::service::upstream::RequestScope;
use async_trait::async_trait;
use shared::domain::model::User;
use shared::domain::requests::{LoginRequest, RegisterRequest};
use shared::domain::responses::ApiResponse;
use shared::errors::HttpError;
use std::sync::Arc;

pub type DynAuthApi = Arc<dyn AuthApiTrait + Send + Sync>;

#[async_trait]
pub trait AuthApiTrait {
    async fn login(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError>;

    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError>;

    async fn me(&self, scope: &RequestScope) -> Result<ApiResponse<User>, HttpError>;
}
