//! 주식 시세 REST API 서버.
//!
//! 키움 REST API를 감싸는 얇은 프록시입니다.
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`services`]: 시세 조회 서비스 (벤더 응답 → DTO 변환)
//! - [`routes`]: REST API 엔드포인트
//! - [`error`]: 에러 응답 형식
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod error;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::{create_api_router, create_app};
pub use services::{QuoteSource, ServiceError, StockQuote, StockService};
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
