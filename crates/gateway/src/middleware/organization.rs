use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use uuid::Uuid;

/// Organization the request is scoped to, taken from the
/// `x-organization-id` header on every organization-scoped route.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationId(pub Uuid);

pub async fn organization_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let header = req
        .headers()
        .get("x-organization-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let Some(raw) = header else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Missing x-organization-id header",
                StatusCode::BAD_REQUEST.as_u16(),
            )),
        ));
    };

    let org_id = Uuid::parse_str(&raw).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "x-organization-id must be a valid UUID",
                StatusCode::BAD_REQUEST.as_u16(),
            )),
        )
    })?;

    req.extensions_mut().insert(OrganizationId(org_id));

    Ok(next.run(req).await)
}
