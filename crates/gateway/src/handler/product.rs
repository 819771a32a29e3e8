use crate::{
    abstract_trait::product::DynProductApi,
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
use shared::domain::model::{Product, Transaction};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, FindAllQuery, RestockRequest,
    UpdateProductRequest,
};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated product list", body = ApiResponse<PagedData<Product>>),
        (status = 400, description = "Missing organization header"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&scope(org, &token), &params).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&scope(org, &token), id).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&scope(org, &token), &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(&scope(org, &token), id, &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(&scope(org, &token), id).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/check-out",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = CheckOutRequest,
    responses(
        (status = 201, description = "Check-out recorded", body = ApiResponse<Transaction>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn check_out_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckOutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check_out(&scope(org, &token), id, &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/check-in",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Check-in recorded", body = ApiResponse<Transaction>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn check_in_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckInRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.check_in(&scope(org, &token), id, &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/restock",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Stock increased", body = ApiResponse<Product>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn restock_product(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<RestockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.restock(&scope(org, &token), id, &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}/transactions",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID"), FindAllQuery),
    responses(
        (status = 200, description = "Transaction history", body = ApiResponse<PagedData<Transaction>>)
    )
)]
pub async fn get_product_transactions(
    Extension(service): Extension<DynProductApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.transactions(&scope(org, &token), id, &params).await?;
    Ok(reply(response))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/products", post(create_product))
        .route("/api/v1/products/{id}", get(get_product))
        .route("/api/v1/products/{id}", put(update_product))
        .route("/api/v1/products/{id}", delete(delete_product))
        .route("/api/v1/products/{id}/check-out", post(check_out_product))
        .route("/api/v1/products/{id}/check-in", post(check_in_product))
        .route("/api/v1/products/{id}/restock", post(restock_product))
        .route(
            "/api/v1/products/{id}/transactions",
            get(get_product_transactions),
        )
        .route_layer(middleware::from_fn(organization_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_api.clone()))
}
