use crate::{
    abstract_trait::DynInventoryApi,
    error::StoreError,
    session::SessionContext,
    views::{self, ProductFilter, ProductStats},
};
use shared::domain::model::{Product, StockStatus, Transaction, TransactionType};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, RestockRequest, UpdateProductRequest,
};
use shared::utils::parse_datetime;
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// In-memory product store for one organization. The product list is a
/// cache with full-replace semantics: a successful fetch swaps the whole
/// snapshot, a failed fetch leaves the previous snapshot untouched and
/// records the error. Mutations are awaited to completion before the
/// follow-up refetch is issued.
pub struct ProductStore {
    api: DynInventoryApi,
    session: SessionContext,
    products: Vec<Product>,
    filter: ProductFilter,
    current_page: usize,
    items_per_page: usize,
    selected: HashSet<Uuid>,
    last_error: Option<String>,
}

impl ProductStore {
    pub fn new(api: DynInventoryApi, session: SessionContext) -> Self {
        Self {
            api,
            session,
            products: Vec::new(),
            filter: ProductFilter::default(),
            current_page: 1,
            items_per_page: 10,
            selected: HashSet::new(),
            last_error: None,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the whole snapshot on success. Selection is pruned to ids
    /// that still exist; everything else about the view state is kept.
    pub async fn fetch_products(&mut self) -> Result<(), StoreError> {
        match self.api.fetch_products(&self.session).await {
            Ok(products) => {
                debug!(count = products.len(), "product list replaced");
                self.products = products;
                let ids: HashSet<Uuid> = self.products.iter().map(|p| p.id).collect();
                self.selected.retain(|id| ids.contains(id));
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "product fetch failed; keeping previous snapshot");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn stats(&self) -> ProductStats {
        views::product_stats(&self.products)
    }

    /// Search AND category AND status, then the current page slice.
    pub fn paginated_products(&self) -> Vec<&Product> {
        let filtered = views::filter_products(&self.products, &self.filter);
        views::paginate(&filtered, self.current_page, self.items_per_page)
    }

    pub fn filtered_count(&self) -> usize {
        views::filter_products(&self.products, &self.filter).len()
    }

    pub fn total_pages(&self) -> usize {
        views::total_pages(self.filtered_count(), self.items_per_page)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    // Filter changes jump back to the first page; a page that only existed
    // under the old filter is not a meaningful position under the new one.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.current_page = 1;
    }

    pub fn set_category_filter(&mut self, category: Option<Uuid>) {
        self.filter.category = category;
        self.current_page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<StockStatus>) {
        self.filter.status = status;
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn selected(&self) -> &HashSet<Uuid> {
        &self.selected
    }

    pub fn toggle_product_selection(&mut self, id: Uuid) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Select-all is scoped to the currently visible page (filtered and
    /// paginated), never the full dataset. If every visible product is
    /// already selected the visible ones are deselected.
    pub fn toggle_all_selection(&mut self) {
        let visible: Vec<Uuid> = self.paginated_products().iter().map(|p| p.id).collect();
        let all_selected =
            !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id));
        if all_selected {
            for id in visible {
                self.selected.remove(&id);
            }
        } else {
            self.selected.extend(visible);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub async fn create_product(&mut self, req: CreateProductRequest) -> Result<(), StoreError> {
        self.api.create_product(&self.session, &req).await?;
        self.fetch_products().await
    }

    pub async fn update_product(
        &mut self,
        product_id: Uuid,
        req: UpdateProductRequest,
    ) -> Result<(), StoreError> {
        self.api.update_product(&self.session, product_id, &req).await?;
        self.fetch_products().await
    }

    pub async fn delete_product(&mut self, product_id: Uuid) -> Result<(), StoreError> {
        self.api.delete_product(&self.session, product_id).await?;
        self.fetch_products().await
    }

    pub async fn check_out_product(
        &mut self,
        product_id: Uuid,
        req: CheckOutRequest,
    ) -> Result<(), StoreError> {
        self.api.check_out(&self.session, product_id, &req).await?;
        self.fetch_products().await
    }

    pub async fn check_in_product(
        &mut self,
        product_id: Uuid,
        req: CheckInRequest,
    ) -> Result<(), StoreError> {
        self.api.check_in(&self.session, product_id, &req).await?;
        self.fetch_products().await
    }

    pub async fn restock_product(
        &mut self,
        product_id: Uuid,
        req: RestockRequest,
    ) -> Result<(), StoreError> {
        self.api.restock(&self.session, product_id, &req).await?;
        self.fetch_products().await
    }

    /// Read-through transaction lookup: the store keeps no transaction
    /// index, every call refetches the product's history.
    pub async fn last_transaction(
        &self,
        product_id: Uuid,
        transaction_type: TransactionType,
    ) -> Result<Option<Transaction>, StoreError> {
        let transactions = self.api.fetch_transactions(&self.session, product_id).await?;
        Ok(transactions
            .into_iter()
            .filter(|t| t.transaction_type == transaction_type)
            .max_by_key(created_on_utc))
    }

    /// The check-in flow needs the OPEN check-out to close; errors if the
    /// product has none.
    pub async fn last_open_check_out(&self, product_id: Uuid) -> Result<Transaction, StoreError> {
        let transactions = self.api.fetch_transactions(&self.session, product_id).await?;
        transactions
            .into_iter()
            .filter(|t| t.is_open_check_out())
            .max_by_key(created_on_utc)
            .ok_or(StoreError::NoOpenCheckOut)
    }
}

// Upstream timestamps may carry arbitrary offsets; ordering happens on the
// UTC-normalized form.
fn created_on_utc(transaction: &Transaction) -> Option<String> {
    transaction
        .created_on
        .as_deref()
        .and_then(parse_datetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use shared::domain::model::TransactionStatus;
    use std::sync::Arc;

    mock! {
        Api {}

        #[async_trait]
        impl crate::abstract_trait::InventoryApi for Api {
            async fn fetch_products(&self, session: &SessionContext) -> Result<Vec<Product>, StoreError>;
            async fn fetch_transactions(&self, session: &SessionContext, product_id: Uuid) -> Result<Vec<Transaction>, StoreError>;
            async fn create_product(&self, session: &SessionContext, req: &CreateProductRequest) -> Result<(), StoreError>;
            async fn update_product(&self, session: &SessionContext, product_id: Uuid, req: &UpdateProductRequest) -> Result<(), StoreError>;
            async fn delete_product(&self, session: &SessionContext, product_id: Uuid) -> Result<(), StoreError>;
            async fn check_out(&self, session: &SessionContext, product_id: Uuid, req: &CheckOutRequest) -> Result<(), StoreError>;
            async fn check_in(&self, session: &SessionContext, product_id: Uuid, req: &CheckInRequest) -> Result<(), StoreError>;
            async fn restock(&self, session: &SessionContext, product_id: Uuid, req: &RestockRequest) -> Result<(), StoreError>;
        }
    }

    fn session() -> SessionContext {
        SessionContext::new("token", Uuid::new_v4(), Uuid::new_v4())
    }

    fn product(name: &str, available: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            sku: format!("SKU-{name}"),
            category_id: None,
            category_name: None,
            total_quantity: available,
            available_quantity: available,
            checked_out_quantity: 0,
            low_stock_threshold: 2,
            status: StockStatus::derive(available, 2),
            image_url: None,
            created_on: None,
            updated_on: None,
        }
    }

    #[tokio::test]
    async fn fetch_failure_keeps_previous_snapshot() {
        let mut api = MockApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_fetch_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![product("keyboard", 12)]));
        api.expect_fetch_products()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(StoreError::Api("connection refused".into())));

        let mut store = ProductStore::new(Arc::new(api), session());
        store.fetch_products().await.unwrap();
        assert_eq!(store.products().len(), 1);
        assert!(store.last_error().is_none());

        let err = store.fetch_products().await.unwrap_err();
        assert!(matches!(err, StoreError::Api(_)));
        assert_eq!(store.products().len(), 1, "prior state must survive");
        assert_eq!(store.last_error(), Some("connection refused"));
    }

    #[tokio::test]
    async fn check_out_triggers_exactly_one_refetch() {
        let mut api = MockApi::new();
        api.expect_check_out().times(1).returning(|_, _, _| Ok(()));
        api.expect_fetch_products()
            .times(1)
            .returning(|_| Ok(vec![product("scanner", 4)]));

        let mut store = ProductStore::new(Arc::new(api), session());
        let req = CheckOutRequest {
            user_id: Uuid::new_v4(),
            quantity: 1,
            purpose: "site visit".into(),
        };
        store.check_out_product(Uuid::new_v4(), req).await.unwrap();
        assert_eq!(store.products().len(), 1);
    }

    #[tokio::test]
    async fn rejected_mutation_skips_the_refetch() {
        let mut api = MockApi::new();
        api.expect_check_out()
            .times(1)
            .returning(|_, _, _| Err(StoreError::Api("quantity exceeds available stock".into())));
        api.expect_fetch_products().times(0);

        let mut store = ProductStore::new(Arc::new(api), session());
        let req = CheckOutRequest {
            user_id: Uuid::new_v4(),
            quantity: 99,
            purpose: "bulk".into(),
        };
        assert!(store.check_out_product(Uuid::new_v4(), req).await.is_err());
    }

    #[tokio::test]
    async fn select_all_is_scoped_to_the_visible_page() {
        let products: Vec<Product> = (0..25).map(|i| product(&format!("p{i}"), 10)).collect();
        let mut api = MockApi::new();
        api.expect_fetch_products()
            .returning(move |_| Ok(products.clone()));

        let mut store = ProductStore::new(Arc::new(api), session());
        store.fetch_products().await.unwrap();
        store.set_page(3);

        store.toggle_all_selection();
        assert_eq!(store.selected().len(), 5, "page 3 holds the last 5 items");

        // Toggling again deselects only that page.
        store.toggle_all_selection();
        assert!(store.selected().is_empty());
    }

    #[tokio::test]
    async fn filter_change_resets_to_first_page() {
        let products: Vec<Product> = (0..25).map(|i| product(&format!("p{i}"), 10)).collect();
        let mut api = MockApi::new();
        api.expect_fetch_products()
            .returning(move |_| Ok(products.clone()));

        let mut store = ProductStore::new(Arc::new(api), session());
        store.fetch_products().await.unwrap();
        store.set_page(3);
        store.set_search("p1");
        assert_eq!(store.current_page(), 1);
    }

    #[tokio::test]
    async fn last_open_check_out_picks_the_most_recent_open_one() {
        let product_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mk = |status, created_on: &str| Transaction {
            id: Uuid::new_v4(),
            product_id,
            quantity: 1,
            transaction_type: TransactionType::CheckOut,
            user_id,
            status: Some(status),
            purpose: None,
            condition: None,
            check_out_transaction_id: None,
            created_on: Some(created_on.to_string()),
        };
        // The winner is earlier as a raw string but later once offsets are
        // normalized to UTC.
        let history = vec![
            mk(TransactionStatus::Closed, "2026-08-01T09:00:00Z"),
            mk(TransactionStatus::Open, "2026-08-03T12:00:00Z"),
            mk(TransactionStatus::Open, "2026-08-03T09:00:00-05:00"),
        ];
        let expected = history[2].id;

        let mut api = MockApi::new();
        api.expect_fetch_transactions()
            .returning(move |_, _| Ok(history.clone()));

        let store = ProductStore::new(Arc::new(api), session());
        let tx = store.last_open_check_out(product_id).await.unwrap();
        assert_eq!(tx.id, expected);
    }

    #[tokio::test]
    async fn last_open_check_out_errors_when_none_open() {
        let mut api = MockApi::new();
        api.expect_fetch_transactions().returning(|_, _| Ok(vec![]));

        let store = ProductStore::new(Arc::new(api), session());
        let err = store.last_open_check_out(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, StoreError::NoOpenCheckOut));
    }
}
