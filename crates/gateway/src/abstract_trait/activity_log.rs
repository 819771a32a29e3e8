use crate::service::upstream::RequestScope;
use async_trait::async_trait;
use shared::domain::model::ActivityLog;
use shared::domain::requests::FindAllQuery;
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;

pub type DynActivityLogApi = Arc<dyn ActivityLogApiTrait + Send + Sync>;

#[async_trait]
pub trait ActivityLogApiTrait {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<ActivityLog>>, HttpError>;
}
