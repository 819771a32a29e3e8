use crate::{
    abstract_trait::auth::DynAuthApi,
    handler::reply,
    middleware::{
        auth::{BearerToken, auth_middleware},
        validate::SimpleValidatedJson,
    },
    service::upstream::RequestScope,
    state::AppState,
};
use axum::{
    extract::Extension,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::domain::model::User;
use shared::domain::requests::{LoginRequest, RegisterRequest};
use shared::domain::responses::ApiResponse;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded, token in data", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login_handler(
    Extension(service): Extension<DynAuthApi>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<serde_json::Value>),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_handler(
    Extension(service): Extension<DynAuthApi>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok(reply(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<User>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthApi>,
    Extension(token): Extension<BearerToken>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.me(&RequestScope::with_token(token.0.clone())).await?;
    Ok(reply(response))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public = OpenApiRouter::new()
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/register", post(register_handler));

    let authenticated = OpenApiRouter::new()
        .route("/api/v1/auth/me", get(get_me_handler))
        .route_layer(middleware::from_fn(auth_middleware));

    public
        .merge(authenticated)
        .layer(Extension(app_state.di_container.auth_api.clone()))
}
