use crate::{error::StoreError, session::SessionContext};
use async_trait::async_trait;
use shared::domain::model::{Product, Transaction};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, RestockRequest, UpdateProductRequest,
};
use std::sync::Arc;
use uuid::Uuid;

pub type DynInventoryApi = Arc<dyn InventoryApi + Send + Sync>;

/// Gateway-facing API surface the store depends on. Tests inject mocks;
/// the real implementation wraps HTTP calls to the gateway routes.
#[async_trait]
pub trait InventoryApi {
    async fn fetch_products(&self, session: &SessionContext) -> Result<Vec<Product>, StoreError>;

    async fn fetch_transactions(
        &self,
        session: &SessionContext,
        product_id: Uuid,
    ) -> Result<Vec<Transaction>, StoreError>;

    async fn create_product(
        &self,
        session: &SessionContext,
        req: &CreateProductRequest,
    ) -> Result<(), StoreError>;

    async fn update_product(
        &self,
        session: &SessionContext,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<(), StoreError>;

    async fn delete_product(
        &self,
        session: &SessionContext,
        product_id: Uuid,
    ) -> Result<(), StoreError>;

    async fn check_out(
        &self,
        session: &SessionContext,
        product_id: Uuid,
        req: &CheckOutRequest,
    ) -> Result<(), StoreError>;

    async fn check_in(
        &self,
        session: &SessionContext,
        product_id: Uuid,
        req: &CheckInRequest,
    ) -> Result<(), StoreError>;

    async fn restock(
        &self,
        session: &SessionContext,
        product_id: Uuid,
        req: &RestockRequest,
    ) -> Result<(), StoreError>;
}
