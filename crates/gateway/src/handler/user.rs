use crate::{
    abstract_trait::user::DynUserApi,
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
    routing::{delete, get, post},
};
use shared::domain::model::{Invitation, User};
use shared::domain::requests::{FindAllQuery, InviteUserRequest};
use shared::domain::responses::{ApiResponse, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "User",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Paginated member list", body = ApiResponse<PagedData<User>>)
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&scope(org, &token), &params).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<User>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&scope(org, &token), id).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/invitations",
    tag = "User",
    security(("bearer_auth" = [])),
    params(FindAllQuery),
    responses(
        (status = 200, description = "Pending invitations", body = ApiResponse<PagedData<Invitation>>)
    )
)]
pub async fn get_invitations(
    Extension(service): Extension<DynUserApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Query(params): Query<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .find_invitations(&scope(org, &token), &params)
        .await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/invitations",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body = InviteUserRequest,
    responses(
        (status = 201, description = "Invitation sent", body = ApiResponse<Invitation>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn invite_user(
    Extension(service): Extension<DynUserApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    SimpleValidatedJson(body): SimpleValidatedJson<InviteUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.invite(&scope(org, &token), &body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    delete,
    path = "/api/v1/invitations/{id}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Invitation revoked", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Invitation not found")
    )
)]
pub async fn revoke_invitation(
    Extension(service): Extension<DynUserApi>,
    Extension(org): Extension<OrganizationId>,
    Extension(token): Extension<BearerToken>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.revoke_invitation(&scope(org, &token), id).await?;
    Ok(reply(response))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/users", get(get_users))
        .route("/api/v1/users/{id}", get(get_user))
        .route("/api/v1/invitations", get(get_invitations))
        .route("/api/v1/invitations", post(invite_user))
        .route("/api/v1/invitations/{id}", delete(revoke_invitation))
        .route_layer(middleware::from_fn(organization_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_api.clone()))
}
