mod activity_log;
mod auth;
mod category;
mod product;
mod user;

use crate::middleware::{auth::BearerToken, organization::OrganizationId};
use crate::service::upstream::RequestScope;
use crate::state::AppState;
use anyhow::Result;
use axum::Json;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::domain::responses::ApiResponse;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::activity_log::activity_log_routes;
pub use self::auth::auth_routes;
pub use self::category::category_routes;
pub use self::product::product_routes;
pub use self::user::user_routes;

pub(crate) fn scope(org: OrganizationId, token: &BearerToken) -> RequestScope {
    RequestScope::for_org(org.0, token.0.clone())
}

/// Replays the upstream 2xx code on the way out; the envelope body is
/// already normalized by the service layer.
pub(crate) fn reply<T>(response: ApiResponse<T>) -> impl IntoResponse
where
    T: serde::Serialize,
{
    let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK);
    (status, Json(response))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login_handler,
        auth::register_handler,
        auth::get_me_handler,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::check_out_product,
        product::check_in_product,
        product::restock_product,
        product::get_product_transactions,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        activity_log::get_activity_logs,

        user::get_users,
        user::get_user,
        user::get_invitations,
        user::invite_user,
        user::revoke_invitation,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication pass-through endpoints"),
        (name = "Product", description = "Product and transaction endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "ActivityLog", description = "Activity log endpoints"),
        (name = "User", description = "User and invitation endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: Arc<AppState>) -> axum::Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(app_state.clone())
            .merge(auth_routes(app_state.clone()))
            .merge(product_routes(app_state.clone()))
            .merge(category_routes(app_state.clone()))
            .merge(activity_log_routes(app_state.clone()))
            .merge(user_routes(app_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!(addr = %listener.local_addr()?, "gateway listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
