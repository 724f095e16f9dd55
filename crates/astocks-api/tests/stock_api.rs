//! 시세 API 통합 테스트.
//!
//! mockito 서버가 키움 게이트웨이를 대신하고, 실제 `KiwoomClient`를 거쳐
//! 라우터까지 전체 경로를 확인합니다.

use std::sync::Arc;

use astocks_api::{create_app, AppState, StockService};
use astocks_kiwoom::{KiwoomClient, KiwoomConfig, KiwoomEnvironment};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn vendor_with_token() -> (ServerGuard, mockito::Mock) {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(
            json!({
                "expires_dt": "29991231235959",
                "token_type": "bearer",
                "token": "api-test-token",
                "return_code": 0,
                "return_msg": "정상적으로 처리되었습니다"
            })
            .to_string(),
        )
        .create_async()
        .await;
    (server, token)
}

fn app_for(server: &ServerGuard) -> Router {
    let config = KiwoomConfig::new(
        "api_test_key".to_string(),
        "api_test_secret".to_string(),
        KiwoomEnvironment::Mock,
    )
    .with_base_url(server.url());
    let client = Arc::new(KiwoomClient::from_config(config).unwrap());
    let state = AppState::new(Arc::new(StockService::new(client)));
    create_app(Arc::new(state))
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_get_price_round_trip() {
    let (mut server, token) = vendor_with_token().await;
    let quote = server
        .mock("POST", "/api/dostk/acnt")
        .match_header("api-id", "tr10001")
        .match_header("authorization", "Bearer api-test-token")
        .match_body(Matcher::Json(json!({"stock_code": "005930"})))
        .with_status(200)
        .with_body(
            json!({
                "name": "삼성전자",
                "price": 61300,
                "prev_close": 62000,
                "price_change": -700,
                "price_change_percent": -1.13,
                "volume": 12345678,
                "return_code": 0,
                "return_msg": "정상적으로 처리되었습니다"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/stocks/price/005930")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["code"], "005930");
    assert_eq!(json["name"], "삼성전자");
    assert_eq!(json["current_price"], 61300.0);
    assert_eq!(json["previous_close"], 62000.0);
    assert_eq!(json["change"], -700.0);
    assert_eq!(json["change_percent"], -1.13);
    assert_eq!(json["volume"], 12345678);
    assert_eq!(json["timestamp"].as_str().unwrap().len(), 19);

    token.assert_async().await;
    quote.assert_async().await;
}

#[tokio::test]
async fn test_post_price_round_trip() {
    let (mut server, _token) = vendor_with_token().await;
    let _quote = server
        .mock("POST", "/api/dostk/acnt")
        .match_body(Matcher::Json(json!({"stock_code": "000660"})))
        .with_status(200)
        .with_body(
            json!({
                "name": "SK하이닉스",
                "price": "+187,500",
                "prev_close": "185,000",
                "price_change": "+2,500",
                "price_change_percent": "+1.35",
                "volume": "2,345,678",
                "return_code": 0
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/stocks/price")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"code": "000660"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["current_price"], 187500.0);
    assert_eq!(json["change"], 2500.0);
    assert_eq!(json["volume"], 2345678);
}

#[tokio::test]
async fn test_vendor_rejection_returns_message_envelope() {
    let (mut server, _token) = vendor_with_token().await;
    let _quote = server
        .mock("POST", "/api/dostk/acnt")
        .with_status(200)
        .with_body(json!({"return_code": 2, "return_msg": "종목정보가 없습니다"}).to_string())
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/stocks/price/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;

    assert_eq!(json.as_object().unwrap().len(), 1);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("종목정보가 없습니다"));
}

#[tokio::test]
async fn test_vendor_outage_returns_400() {
    let (mut server, _token) = vendor_with_token().await;
    let _quote = server
        .mock("POST", "/api/dostk/acnt")
        .with_status(503)
        .with_body("service unavailable")
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/stocks/price/005930")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_rejection_returns_400() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(json!({"return_code": 3, "return_msg": "앱키 인증 실패"}).to_string())
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/stocks/price/005930")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("앱키 인증 실패"));
}

#[tokio::test]
async fn test_health_and_openapi_are_served() {
    let server = Server::new_async().await;
    let app = app_for(&server);

    let health = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_json(health).await, json!({"status": "ok"}));

    let spec = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(spec.status(), StatusCode::OK);
    let spec = body_json(spec).await;
    assert!(spec["paths"]["/stocks/price/{code}"].is_object());
}
