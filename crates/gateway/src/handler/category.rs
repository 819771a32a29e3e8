use crate::{
    abstract_trait::category::DynCategoryApi,
    handler::{reply, scope},
    middleware::{
        auth::{BearerToken, auth_middleware},
        organization::{OrganizationId, organization_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    extract::{Extension, Path, Query},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::domain::model::Category;
use shared::domain::requests::{CreateCategoryRequest, FindAllQuery, UpdateCategoryRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated category list", body = ApiResponse<PagedData<Category>>)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&scope(org, &token), &params).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&scope(org, &token), id).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&scope(org, &token), &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(&scope(org, &token), id, &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(&scope(org, &token), id).await?;
    Ok(reply(response))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/categories", get(get_categories))
        .route("/api/v1/categories", post(create_category))
        .route("/api/v1/categories/{id}", get(get_category))
        .route("/api/v1/categories/{id}", put(update_category))
        .route("/api/v1/categories/{id}", delete(delete_category))
        .route_layer(middleware::from_fn(organization_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_api.clone()))
}
