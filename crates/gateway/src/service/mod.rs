mod activity_log;
mod auth;
mod category;
mod product;
pub mod upstream;
mod user;

pub use self::activity_log::ActivityLogHttpService;
pub use self::auth::AuthHttpService;
pub use self::category::CategoryHttpService;
pub use self::product::ProductHttpService;
pub use self::upstream::{RequestScope, UpstreamClient};
pub use self::user::UserHttpService;

use shared::domain::requests::FindAllQuery;
use shared::domain::responses::ApiResponse;
use shared::errors::{HttpError, UpstreamError};
use shared::utils::{Method, Metrics, Outcome};
use std::future::Future;
use tokio::time::Instant;

/// List-endpoint query parameters in the upstream's naming.
pub(crate) fn list_query(query: &FindAllQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("size", query.page_size.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }
    params
}

/// Times one upstream call and records it against the service's metric
/// families before converting the error for the HTTP layer.
pub(crate) async fn measured<T>(
    metrics: &Metrics,
    method: Method,
    fut: impl Future<Output = Result<ApiResponse<T>, UpstreamError>>,
) -> Result<ApiResponse<T>, HttpError> {
    let start = Instant::now();
    let result = fut.await;
    let outcome = if result.is_ok() {
        Outcome::Success
    } else {
        Outcome::Error
    };
    metrics.record(method, outcome, start.elapsed().as_secs_f64());
    result.map_err(HttpError::from)
}
