//! 키움 REST API 디스패처.
//!
//! 모든 조회 API는 같은 형태를 따릅니다:
//! `POST {base}{path}`, JSON 본문, `api-id` 헤더로 기능 구분,
//! 응답 본문의 `return_code`로 성공 여부 판단.

use crate::auth::KiwoomOAuth;
use crate::config::KiwoomConfig;
use crate::error::KiwoomError;
use crate::request::KiwoomRequest;
use crate::response::{
    return_code, return_msg, Continuation, KiwoomResponse, CONT_YN_HEADER, NEXT_KEY_HEADER,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, instrument};

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// 키움 REST API 클라이언트.
///
/// `KiwoomOAuth`를 `Arc`로 공유하므로 여러 클라이언트가 같은 토큰을 사용할 수 있습니다.
pub struct KiwoomClient {
    oauth: Arc<KiwoomOAuth>,
    client: Client,
}

impl KiwoomClient {
    /// 새로운 클라이언트 생성 (소유권 이전).
    pub fn new(oauth: KiwoomOAuth) -> Result<Self, KiwoomError> {
        Self::with_shared_oauth(Arc::new(oauth))
    }

    /// 설정에서 OAuth와 클라이언트를 함께 생성.
    pub fn from_config(config: KiwoomConfig) -> Result<Self, KiwoomError> {
        Self::new(KiwoomOAuth::new(config)?)
    }

    /// 공유된 OAuth로 클라이언트 생성.
    ///
    /// # 예시
    /// ```ignore
    /// let oauth = Arc::new(KiwoomOAuth::new(config)?);
    /// let quotes = KiwoomClient::with_shared_oauth(Arc::clone(&oauth))?;
    /// let account = KiwoomClient::with_shared_oauth(oauth)?;
    /// ```
    pub fn with_shared_oauth(oauth: Arc<KiwoomOAuth>) -> Result<Self, KiwoomError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(oauth.config().timeout_secs))
            .build()
            .map_err(|e| KiwoomError::NetworkError(format!("HTTP client 생성 실패: {}", e)))?;

        Ok(Self { oauth, client })
    }

    /// 내부 OAuth 참조 반환.
    pub fn oauth(&self) -> &Arc<KiwoomOAuth> {
        &self.oauth
    }

    // ========================================
    // Dispatcher
    // ========================================

    /// 벤더 API 단일 호출.
    ///
    /// 토큰을 확보한 뒤 표준 헤더를 붙여 한 번만 요청합니다. 재시도하지 않습니다.
    ///
    /// # Errors
    /// - 2xx가 아닌 응답: `HttpStatus`
    /// - JSON이 아닌 본문: `ParseError`
    /// - `return_code`가 없거나 0이 아님: `ApiError` (`return_msg` 포함)
    #[instrument(skip_all, fields(api_id = %api_id, path = %path))]
    pub async fn call<B>(
        &self,
        method: Method,
        path: &str,
        api_id: &str,
        body: &B,
        continuation: &Continuation,
    ) -> Result<KiwoomResponse, KiwoomError>
    where
        B: Serialize + ?Sized,
    {
        let headers = self.build_headers(api_id, continuation).await?;
        let url = self.oauth.config().url(path);

        let response = self
            .client
            .request(method, &url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let next = Continuation::from_headers(response.headers());
        let text = response.text().await?;

        if !status.is_success() {
            error!(status = %status, body = %text, "Kiwoom request failed");
            return Err(KiwoomError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(body_len = text.len(), has_next = next.has_next, "Kiwoom response received");

        let json: Value = serde_json::from_str(&text).map_err(|e| {
            KiwoomError::ParseError(format!("Failed to parse {} response: {}", api_id, e))
        })?;

        check_return_code(&json)?;

        Ok(KiwoomResponse {
            body: json,
            continuation: next,
        })
    }

    /// 요청 타입으로 첫 페이지 조회, 본문만 반환.
    pub async fn request<R: KiwoomRequest>(&self, request: &R) -> Result<Value, KiwoomError> {
        self.request_page(request, &Continuation::none())
            .await
            .map(|response| response.body)
    }

    /// 요청 타입으로 지정한 페이지 조회.
    pub async fn request_page<R: KiwoomRequest>(
        &self,
        request: &R,
        continuation: &Continuation,
    ) -> Result<KiwoomResponse, KiwoomError> {
        self.call(Method::POST, R::PATH, R::API_ID, request, continuation)
            .await
    }

    /// 접근 토큰 폐기 (종료 시 호출).
    pub async fn revoke(&self) -> Result<(), KiwoomError> {
        self.oauth.revoke_token().await
    }

    /// 인증된 요청을 위한 공통 헤더 생성.
    async fn build_headers(
        &self,
        api_id: &str,
        continuation: &Continuation,
    ) -> Result<HeaderMap, KiwoomError> {
        let token = self.oauth.get_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(
            AUTHORIZATION,
            header_value("authorization", &token.auth_header())?,
        );
        headers.insert("api-id", header_value("api-id", api_id)?);
        headers.insert(
            CONT_YN_HEADER,
            HeaderValue::from_static(continuation.cont_yn()),
        );
        headers.insert(
            NEXT_KEY_HEADER,
            header_value(NEXT_KEY_HEADER, &continuation.next_key)?,
        );

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, KiwoomError> {
    value
        .parse()
        .map_err(|_| KiwoomError::InvalidHeader(format!("{}에 유효하지 않은 문자 포함", name)))
}

/// `return_code == 0`이 아니면 `ApiError` 반환.
fn check_return_code(body: &Value) -> Result<(), KiwoomError> {
    match return_code(body) {
        Some(0) => Ok(()),
        code => {
            let message = return_msg(body)
                .map(str::to_string)
                .unwrap_or_else(|| "return_code가 없는 응답".to_string());
            error!(return_code = ?code, message = %message, "Kiwoom API returned failure");
            Err(KiwoomError::ApiError {
                code: code.unwrap_or(-1),
                message,
            })
        }
    }
}
