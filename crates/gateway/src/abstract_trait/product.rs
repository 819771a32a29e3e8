use crate::service::upstream::RequestScope;
use async_trait::async_trait;
use shared::domain::model::{Product, Transaction};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, FindAllQuery, RestockRequest,
    UpdateProductRequest,
};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductApi = Arc<dyn ProductApiTrait + Send + Sync>;

#[async_trait]
pub trait ProductApiTrait {
    async fn find_all(
        &self,
        scope: &RequestScope,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Product>>, HttpError>;

    async fn find_by_id(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<Product>, HttpError>;

    async fn create(
        &self,
        scope: &RequestScope,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, HttpError>;

    async fn update(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, HttpError>;

    async fn delete(
        &self,
        scope: &RequestScope,
        id: Uuid,
    ) -> Result<ApiResponse<serde_json::Value>, HttpError>;

    async fn check_out(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &CheckOutRequest,
    ) -> Result<ApiResponse<Transaction>, HttpError>;

    async fn check_in(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &CheckInRequest,
    ) -> Result<ApiResponse<Transaction>, HttpError>;

    async fn restock(
        &self,
        scope: &RequestScope,
        id: Uuid,
        req: &RestockRequest,
    ) -> Result<ApiResponse<Product>, HttpError>;

    async fn transactions(
        &self,
        scope: &RequestScope,
        id: Uuid,
        query: &FindAllQuery,
    ) -> Result<ApiResponse<PagedData<Transaction>>, HttpError>;
}
