use crate::{
    abstract_trait::{
        DynActivityLogApi, DynAuthApi, DynCategoryApi, DynProductApi, DynUserApi,
    },
    service::{
        ActivityLogHttpService, AuthHttpService, CategoryHttpService, ProductHttpService,
        UpstreamClient, UserHttpService,
    },
};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_api: DynProductApi,
    pub category_api: DynCategoryApi,
    pub activity_log_api: DynActivityLogApi,
    pub user_api: DynUserApi,
    pub auth_api: DynAuthApi,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_api", &"DynProductApi")
            .field("category_api", &"DynCategoryApi")
            .field("activity_log_api", &"DynActivityLogApi")
            .field("user_api", &"DynUserApi")
            .field("auth_api", &"DynAuthApi")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(upstream: Arc<UpstreamClient>, registry: Arc<Mutex<Registry>>) -> Self {
        let product_api: DynProductApi =
            Arc::new(ProductHttpService::new(upstream.clone(), registry.clone()).await);

        let category_api: DynCategoryApi =
            Arc::new(CategoryHttpService::new(upstream.clone(), registry.clone()).await);

        let activity_log_api: DynActivityLogApi =
            Arc::new(ActivityLogHttpService::new(upstream.clone(), registry.clone()).await);

        let user_api: DynUserApi =
            Arc::new(UserHttpService::new(upstream.clone(), registry.clone()).await);

        let auth_api: DynAuthApi =
            Arc::new(AuthHttpService::new(upstream, registry).await);

        Self {
            product_api,
            category_api,
            activity_log_api,
            user_api,
            auth_api,
        }
    }
}
