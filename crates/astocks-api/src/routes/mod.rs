//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/stocks/price/{code}` - 종목 시세 조회 (GET)
//! - `/stocks/price` - 종목 시세 조회 (POST, `{"code": ...}`)

pub mod health;
pub mod stocks;

pub use health::{health_router, HealthResponse, ReadyResponse};
pub use stocks::{stocks_router, StockCodeRequest};

use axum::Router;
use std::sync::Arc;

use crate::openapi::swagger_ui_router;
use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/stocks", stocks_router())
}

/// 상태가 주입된 API 라우터와 Swagger UI를 합친 애플리케이션.
///
/// 미들웨어(trace, timeout, cors)는 바이너리에서 추가합니다.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_router().with_state(state))
        .merge(swagger_ui_router())
}
