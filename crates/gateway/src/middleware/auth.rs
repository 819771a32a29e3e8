use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;

/// Bearer token lifted from the `Authorization` header. The gateway never
/// verifies it locally; the upstream service is the authority and this is
/// forwarded unchanged.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

pub async fn auth_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned));

    let Some(token) = token else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "You are not logged in, please provide a bearer token",
                StatusCode::UNAUTHORIZED.as_u16(),
            )),
        ));
    };

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
