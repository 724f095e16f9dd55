//! 키움 API 에러 타입.

use thiserror::Error;

/// 키움 API 관련 에러.
#[derive(Debug, Error)]
pub enum KiwoomError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 2xx가 아닌 HTTP 응답
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// 인증 실패 (토큰 발급 거부, 토큰/만료시각 누락)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 응답 본문의 `return_code`가 0이 아님
    #[error("API error {code}: {message}")]
    ApiError { code: i64, message: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 헤더 값으로 쓸 수 없는 문자열
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// 에러 분류.
///
/// HTTP 경계나 로그에서 세부 원인 대신 이 분류를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 네트워크, 타임아웃, 비정상 HTTP 상태, 응답 파싱 실패
    Transport,
    /// 벤더가 요청을 거부 (`return_code != 0`)
    VendorRejected,
    /// 인증 실패
    Auth,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::VendorRejected => "vendor_rejected",
            ErrorKind::Auth => "auth",
        }
    }
}

impl KiwoomError {
    /// 에러 분류 반환.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KiwoomError::Unauthorized(_) => ErrorKind::Auth,
            KiwoomError::ApiError { .. } => ErrorKind::VendorRejected,
            KiwoomError::NetworkError(_)
            | KiwoomError::Timeout(_)
            | KiwoomError::HttpStatus { .. }
            | KiwoomError::ParseError(_)
            | KiwoomError::InvalidHeader(_) => ErrorKind::Transport,
        }
    }

    /// 인증 에러인지 확인.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, KiwoomError::Unauthorized(_))
    }

    /// 재시도하면 성공할 수 있는 에러인지 확인.
    ///
    /// 클라이언트는 재시도하지 않으며, 호출자 판단용입니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            KiwoomError::NetworkError(_) | KiwoomError::Timeout(_) => true,
            KiwoomError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for KiwoomError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KiwoomError::Timeout(err.to_string())
        } else if err.is_decode() {
            KiwoomError::ParseError(err.to_string())
        } else {
            KiwoomError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for KiwoomError {
    fn from(err: serde_json::Error) -> Self {
        KiwoomError::ParseError(err.to_string())
    }
}
