use crate::{
    abstract_trait::activity_log::DynActivityLogApi,
    handler::{reply, scope},
    middleware::{
        auth::{BearerToken, auth_middleware},
        organization::{OrganizationId, organization_middleware},
    },
    state::AppState,
};
use axum::{
    extract::{Extension, Query},
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::domain::model::ActivityLog;
use shared::domain::requests::FindAllQuery;
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/v1/activity-logs",
    tag = "ActivityLog",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated activity log", body = ApiResponse<PagedData<ActivityLog>>)
    )
)]
pub async fn get_activity_logs(
    Extension(service): Extension<DynActivityLogApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&scope(org, &token), &params).await?;
    Ok(reply(response))
}

pub fn activity_log_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/activity-logs", get(get_activity_logs))
        .route_layer(middleware::from_fn(organization_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.activity_log_api.clone()))
}
