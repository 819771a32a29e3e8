use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gateway::abstract_trait::product::{DynProductApi, ProductApiTrait};
use gateway::di::DependenciesInject;
use gateway::handler::product_routes;
use gateway::service::{RequestScope, UpstreamClient};
use gateway::state::AppState;
use http_body_util::BodyExt;
use mockall::mock;
use prometheus_client::registry::Registry;
use serde_json::{Value, json};
use shared::domain::model::{Product, StockStatus, Transaction};
use shared::domain::requests::{
    CheckInRequest, CheckOutRequest, CreateProductRequest, FindAllQuery, RestockRequest,
    UpdateProductRequest,
};
use shared::domain::responses::{ApiResponse, Page, PagedData};
use shared::errors::HttpError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

mock! {
    ProductApi {}

    #[async_trait]
    impl ProductApiTrait for ProductApi {
        async fn find_all(&self, scope: &RequestScope, query: &FindAllQuery) -> Result<ApiResponse<PagedData<Product>>, HttpError>;
        async fn find_by_id(&self, scope: &RequestScope, id: Uuid) -> Result<ApiResponse<Product>, HttpError>;
        async fn create(&self, scope: &RequestScope, req: &CreateProductRequest) -> Result<ApiResponse<Product>, HttpError>;
        async fn update(&self, scope: &RequestScope, id: Uuid, req: &UpdateProductRequest) -> Result<ApiResponse<Product>, HttpError>;
        async fn delete(&self, scope: &RequestScope, id: Uuid) -> Result<ApiResponse<serde_json::Value>, HttpError>;
        async fn check_out(&self, scope: &RequestScope, id: Uuid, req: &CheckOutRequest) -> Result<ApiResponse<Transaction>, HttpError>;
        async fn check_in(&self, scope: &RequestScope, id: Uuid, req: &CheckInRequest) -> Result<ApiResponse<Transaction>, HttpError>;
        async fn restock(&self, scope: &RequestScope, id: Uuid, req: &RestockRequest) -> Result<ApiResponse<Product>, HttpError>;
        async fn transactions(&self, scope: &RequestScope, id: Uuid, query: &FindAllQuery) -> Result<ApiResponse<PagedData<Transaction>>, HttpError>;
    }
}

/// Builds an app state whose product service is the given mock; the other
/// services point at an unroutable upstream and are not exercised here.
async fn test_state(product_api: DynProductApi) -> Arc<AppState> {
    let registry = Arc::new(Mutex::new(Registry::default()));
    let upstream =
        Arc::new(UpstreamClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap());
    let mut di = DependenciesInject::new(upstream, registry.clone()).await;
    di.product_api = product_api;
    Arc::new(AppState {
        di_container: di,
        registry,
    })
}

async fn router_with(product_api: DynProductApi) -> axum::Router {
    let state = test_state(product_api).await;
    let (router, _api) = product_routes(state).split_for_parts();
    router
}

fn sample_product() -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "Thermal camera".into(),
        description: None,
        sku: "CAM-880".into(),
        category_id: None,
        category_name: None,
        total_quantity: 6,
        available_quantity: 6,
        checked_out_quantity: 0,
        low_stock_threshold: 2,
        status: StockStatus::InStock,
        image_url: None,
        created_on: None,
        updated_on: None,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn authed(request: axum::http::request::Builder) -> axum::http::request::Builder {
    request
        .header(header::AUTHORIZATION, "Bearer test-token")
        .header("x-organization-id", Uuid::new_v4().to_string())
}

#[tokio::test]
async fn missing_organization_header_is_rejected() {
    let app = router_with(Arc::new(MockProductApi::new())).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("x-organization-id"),
        "message should name the missing header: {body}"
    );
}

#[tokio::test]
async fn malformed_organization_header_is_rejected() {
    let app = router_with(Arc::new(MockProductApi::new())).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .header("x-organization-id", "not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_bearer_token_is_rejected() {
    let app = router_with(Arc::new(MockProductApi::new())).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .header("x-organization-id", Uuid::new_v4().to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn check_out_without_purpose_is_a_400_naming_the_field() {
    let app = router_with(Arc::new(MockProductApi::new())).await;
    let id = Uuid::new_v4();

    let body = json!({ "userId": Uuid::new_v4(), "quantity": 1 });
    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri(format!("/api/v1/products/{id}/check-out"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["message"].as_str().unwrap().contains("purpose"),
        "message should name the missing field: {body}"
    );
}

#[tokio::test]
async fn check_in_with_malformed_transaction_id_is_a_validation_error() {
    let app = router_with(Arc::new(MockProductApi::new())).await;
    let id = Uuid::new_v4();

    let body = json!({
        "checkOutTransactionId": "definitely-not-a-uuid",
        "quantity": 1
    });
    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri(format!("/api/v1/products/{id}/check-in"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["message"].as_str().unwrap().contains("Validation failed"),
        "expected a validation message: {body}"
    );
}

#[tokio::test]
async fn list_success_is_wrapped_in_the_envelope() {
    let mut mock = MockProductApi::new();
    mock.expect_find_all().returning(|_, _| {
        Ok(ApiResponse::success(
            "Products retrieved",
            PagedData {
                content: vec![sample_product()],
                page: Page {
                    size: 10,
                    number: 1,
                    total_elements: 1,
                    total_pages: 1,
                },
            },
            200,
        ))
    });

    let app = router_with(Arc::new(mock)).await;
    let response = app
        .oneshot(
            authed(Request::builder())
                .uri("/api/v1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["page"]["totalElements"], 1);
}

#[tokio::test]
async fn upstream_error_status_passes_through() {
    let mut mock = MockProductApi::new();
    mock.expect_check_out().returning(|_, _, _| {
        Err(HttpError::Upstream {
            code: 422,
            message: "quantity exceeds available stock".into(),
        })
    });

    let app = router_with(Arc::new(mock)).await;
    let id = Uuid::new_v4();
    let body = json!({
        "userId": Uuid::new_v4(),
        "quantity": 99,
        "purpose": "bulk deployment"
    });

    let response = app
        .oneshot(
            authed(Request::builder())
                .method("POST")
                .uri(format!("/api/v1/products/{id}/check-out"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn transport_failure_surfaces_as_internal_error_envelope() {
    // Real service wired to an unroutable upstream address.
    let registry = Arc::new(Mutex::new(Registry::default()));
    let upstream =
        Arc::new(UpstreamClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap());
    let di = DependenciesInject::new(upstream, registry.clone()).await;
    let state = Arc::new(AppState {
        di_container: di,
        registry,
    });
    let (app, _api) = product_routes(state).split_for_parts();

    let response = app
        .oneshot(
            authed(Request::builder())
                .uri("/api/v1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["status_code"], 500);
}
