use crate::service::upstream::RequestScope;
use async_trait::async_trait;
use shared::domain::model::Category;
use shared::domain::requests::{CreateCategoryRequest, FindAllQuery, UpdateCategoryRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryApi = Arc<dyn CategoryApiTrait + Send + Sync>;

#[async_trait]
pub trait CategoryApiTrait {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Category>>, HttpError>;

    async fn find_by_id(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<Category>, HttpError>;

    async fn create(
        &self,
        scope: &RequestScope,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<Category>, HttpError>;

    async fn update(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<Category>, HttpError>;

    async fn delete(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError>;
}
