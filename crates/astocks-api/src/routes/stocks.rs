//! 주식 시세 endpoint.
//!
//! 성공 시 `200`과 [`StockQuote`], 실패 시 `400`과 `{"message"}`를 반환합니다.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use crate::error::{ApiErrorResponse, ApiResult};
use crate::services::StockQuote;
use crate::state::AppState;

/// POST 요청 본문.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockCodeRequest {
    /// 종목코드
    #[schema(example = "005930")]
    pub code: String,
}

/// 종목 시세 조회.
///
/// GET /stocks/price/{code}
#[utoipa::path(
    get,
    path = "/stocks/price/{code}",
    params(
        ("code" = String, Path, description = "종목코드 (예: 005930)")
    ),
    responses(
        (status = 200, description = "시세 조회 성공", body = StockQuote),
        (status = 400, description = "조회 실패", body = ApiErrorResponse)
    ),
    tag = "stocks"
)]
pub async fn get_stock_price(
    State(state): State<Arc<AppState>>,
    code: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<StockQuote>> {
    let Path(code) = code.map_err(ApiErrorResponse::from_path_rejection)?;
    info!(code = %code, "GET /stocks/price");
    fetch_quote(&state, &code).await
}

/// 종목 시세 조회 (본문으로 종목코드 전달).
///
/// POST /stocks/price
#[utoipa::path(
    post,
    path = "/stocks/price",
    request_body = StockCodeRequest,
    responses(
        (status = 200, description = "시세 조회 성공", body = StockQuote),
        (status = 400, description = "조회 실패 또는 잘못된 본문", body = ApiErrorResponse)
    ),
    tag = "stocks"
)]
pub async fn post_stock_price(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StockCodeRequest>, JsonRejection>,
) -> ApiResult<Json<StockQuote>> {
    let Json(request) = payload.map_err(ApiErrorResponse::from_json_rejection)?;
    info!(code = %request.code, "POST /stocks/price");
    fetch_quote(&state, &request.code).await
}

async fn fetch_quote(state: &AppState, code: &str) -> ApiResult<Json<StockQuote>> {
    state
        .stock_service
        .get_stock_price(code)
        .await
        .map(Json)
        .map_err(ApiErrorResponse::from_service_error)
}

/// 시세 라우터 생성.
pub fn stocks_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/price/{code}", get(get_stock_price))
        .route("/price", post(post_stock_price))
}
