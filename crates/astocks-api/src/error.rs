//! API 에러 응답 타입.
//!
//! 모든 실패는 `400 Bad Request`와 `{"message": ...}` 본문으로 응답합니다.
//! 세부 분류는 로그에만 남깁니다.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::services::ServiceError;

/// API 에러 응답.
///
/// ```json
/// { "message": "주식 시세 조회 중 오류 발생: API error 2: 조회할 자료가 없습니다" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `400` 상태 코드와 함께 응답 튜플 생성.
    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (StatusCode::BAD_REQUEST, Json(Self::new(message)))
    }

    /// 서비스 에러를 응답으로 변환 (분류는 로그에 기록).
    pub fn from_service_error(err: ServiceError) -> (StatusCode, Json<Self>) {
        warn!(kind = err.kind(), error = %err, "Stock quote request failed");
        Self::bad_request(err.to_string())
    }

    /// 요청 본문 파싱 실패를 응답으로 변환.
    pub fn from_json_rejection(rejection: JsonRejection) -> (StatusCode, Json<Self>) {
        warn!(kind = "invalid_input", error = %rejection.body_text(), "Malformed request body");
        Self::bad_request(format!("잘못된 요청 본문: {}", rejection.body_text()))
    }

    /// 경로 파라미터 추출 실패를 응답으로 변환.
    pub fn from_path_rejection(rejection: PathRejection) -> (StatusCode, Json<Self>) {
        warn!(kind = "invalid_input", error = %rejection.body_text(), "Malformed path parameter");
        Self::bad_request(format!("잘못된 요청 경로: {}", rejection.body_text()))
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_shape() {
        let (status, Json(body)) = ApiErrorResponse::bad_request("잘못된 종목코드");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"message": "잘못된 종목코드"})
        );
    }

    #[test]
    fn test_service_error_message_is_kept() {
        let (status, Json(body)) = ApiErrorResponse::from_service_error(ServiceError::InvalidCode);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.starts_with("주식 시세 조회 중 오류 발생"));
        assert_eq!(body.to_string(), body.message);
    }
}
