//! OpenAPI 문서화 설정.
//!
//! utoipa로 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui`, 스펙 JSON은 `/api-docs/openapi.json`에서 제공합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `paths(...)` 및 `components(schemas(...))` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{health, stocks, HealthResponse, ReadyResponse, StockCodeRequest};
use crate::services::StockQuote;

/// A-Stocks API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "A-Stocks Quote API",
        description = r#"
# A-Stocks 주식 시세 API

키움증권 REST API를 통해 국내 주식 시세를 조회합니다.

## 에러 형식

모든 실패는 `400 Bad Request`와 `{"message": "..."}` 본문으로 응답합니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "stocks", description = "시세 - 종목 현재가 조회")
    ),
    paths(
        health::health_check,
        health::health_ready,
        stocks::get_stock_price,
        stocks::post_stock_price,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            StockCodeRequest,
            StockQuote,
            ApiErrorResponse,
        )
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
