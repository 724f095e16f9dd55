//! 키움 OAuth 인증 모듈.
//!
//! 처리 기능:
//! - 접근 토큰 발급 (au10001, POST /oauth2/token)
//! - 접근 토큰 폐기 (au10002, POST /oauth2/revoke)
//!
//! 토큰은 만료 시각까지 재사용하며, 동시에 여러 요청이 만료를 발견해도
//! 발급 요청은 한 번만 나갑니다.

use crate::config::KiwoomConfig;
use crate::error::KiwoomError;
use crate::{api_id, path};
use crate::response::{return_code, return_msg};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Asia::Seoul;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// 키움 만료 시각 형식 ("YYYYMMDDHHMMSS", KST).
const EXPIRES_DT_FORMAT: &str = "%Y%m%d%H%M%S";

/// 만료 추적이 포함된 토큰 상태.
#[derive(Debug, Clone)]
pub struct TokenState {
    /// 접근 토큰
    pub access_token: String,
    /// 토큰 타입
    pub token_type: String,
    /// 만료 시각
    pub expires_at: DateTime<Utc>,
}

impl TokenState {
    /// 새 토큰 상태 생성.
    pub fn new(access_token: String, token_type: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            token_type,
            expires_at,
        }
    }

    /// 토큰이 유효한지 확인.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// 주어진 시각 기준으로 토큰이 유효한지 확인.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// 인증 헤더 값 반환.
    ///
    /// 키움은 토큰 타입을 소문자 "bearer"로 내려주므로 항상 "Bearer"로 정규화합니다.
    pub fn auth_header(&self) -> String {
        if self.token_type.eq_ignore_ascii_case("bearer") {
            format!("Bearer {}", self.access_token)
        } else {
            format!("{} {}", self.token_type, self.access_token)
        }
    }
}

/// 키움 OAuth 인증 관리자.
///
/// 토큰 수명 주기를 관리합니다. 여러 클라이언트가 `Arc`로 공유할 수 있습니다.
pub struct KiwoomOAuth {
    config: KiwoomConfig,
    client: Client,
    token: Arc<RwLock<Option<TokenState>>>,
    refresh_lock: Mutex<()>,
}

impl KiwoomOAuth {
    /// 새로운 OAuth 관리자 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `KiwoomError::NetworkError`를 반환합니다.
    pub fn new(config: KiwoomConfig) -> Result<Self, KiwoomError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KiwoomError::NetworkError(format!("HTTP client 생성 실패: {}", e)))?;

        Ok(Self {
            config,
            client,
            token: Arc::new(RwLock::new(None)),
            refresh_lock: Mutex::new(()),
        })
    }

    /// 외부에 보관해 둔 토큰 설정.
    ///
    /// 만료된 토큰은 무시합니다.
    pub async fn set_cached_token(&self, token: TokenState) {
        if token.is_valid() {
            info!(expires_at = %token.expires_at, "Setting cached Kiwoom token");
            *self.token.write().await = Some(token);
        } else {
            debug!("Ignoring expired cached token");
        }
    }

    /// 현재 캐시된 토큰 반환 (API 호출 없이).
    pub async fn get_cached_token(&self) -> Option<TokenState> {
        self.token.read().await.clone()
    }

    /// 유효한 접근 토큰 반환, 필요시 발급.
    pub async fn get_token(&self) -> Result<TokenState, KiwoomError> {
        if let Some(token) = self.valid_cached_token().await {
            debug!(expires_at = %token.expires_at, "Using cached Kiwoom token");
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // 대기 중에 다른 요청이 이미 발급했을 수 있음
        if let Some(token) = self.valid_cached_token().await {
            debug!("Token refreshed by a concurrent request");
            return Ok(token);
        }

        match self.get_cached_token().await {
            Some(expired) => warn!(
                expires_at = %expired.expires_at,
                "Kiwoom token expired, requesting new token"
            ),
            None => info!("No cached Kiwoom token found, requesting new token"),
        }

        self.issue_token().await
    }

    /// 접근 토큰 강제 갱신.
    pub async fn refresh_token(&self) -> Result<TokenState, KiwoomError> {
        let _guard = self.refresh_lock.lock().await;
        self.issue_token().await
    }

    async fn valid_cached_token(&self) -> Option<TokenState> {
        self.token
            .read()
            .await
            .as_ref()
            .filter(|t| t.is_valid())
            .cloned()
    }

    /// 토큰 발급 요청. 호출자가 `refresh_lock`을 잡고 있어야 합니다.
    async fn issue_token(&self) -> Result<TokenState, KiwoomError> {
        if self.config.app_key.trim().is_empty() {
            error!("Kiwoom app key is not configured");
            return Err(KiwoomError::Unauthorized(
                "KIWOOM_APP_KEY가 설정되지 않았습니다.".to_string(),
            ));
        }
        if self.config.app_secret.trim().is_empty() {
            error!("Kiwoom secret key is not configured");
            return Err(KiwoomError::Unauthorized(
                "KIWOOM_SECRET_KEY가 설정되지 않았습니다.".to_string(),
            ));
        }

        info!(
            api_id = api_id::TOKEN,
            app_key = %astocks_core::config::mask(&self.config.app_key),
            "Requesting new Kiwoom access token"
        );

        #[derive(Serialize)]
        struct TokenRequest<'a> {
            grant_type: &'a str,
            appkey: &'a str,
            secretkey: &'a str,
        }

        let request_body = TokenRequest {
            grant_type: "client_credentials",
            appkey: &self.config.app_key,
            secretkey: &self.config.app_secret,
        };

        let response = self
            .client
            .post(self.config.url(path::TOKEN))
            .header("Content-Type", "application/json;charset=UTF-8")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!(status = %status, body = %body, "Token request rejected");
            return Err(KiwoomError::Unauthorized(format!(
                "토큰 발급 거부 ({}): {}",
                status.as_u16(),
                body
            )));
        }
        if !status.is_success() {
            error!(status = %status, body = %body, "Token request failed");
            return Err(KiwoomError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            KiwoomError::ParseError(format!("Failed to parse token response: {}", e))
        })?;

        let token_state = parse_token_response(&json)?;
        *self.token.write().await = Some(token_state.clone());

        info!(expires_at = %token_state.expires_at, "Kiwoom access token obtained");

        Ok(token_state)
    }

    /// 현재 접근 토큰 폐기.
    ///
    /// 벤더 응답과 관계없이 로컬 토큰은 지웁니다. 토큰이 없으면 아무것도 하지 않습니다.
    pub async fn revoke_token(&self) -> Result<(), KiwoomError> {
        let token = match self.token.write().await.take() {
            Some(t) => t.access_token,
            None => return Ok(()),
        };

        info!(api_id = api_id::REVOKE, "Revoking Kiwoom access token");

        #[derive(Serialize)]
        struct RevokeRequest<'a> {
            appkey: &'a str,
            secretkey: &'a str,
            token: &'a str,
        }

        let request_body = RevokeRequest {
            appkey: &self.config.app_key,
            secretkey: &self.config.app_secret,
            token: &token,
        };

        let response = self
            .client
            .post(self.config.url(path::REVOKE))
            .header("Content-Type", "application/json;charset=UTF-8")
            .json(&request_body)
            .send()
            .await?;

        if response.status().is_success() {
            info!("Kiwoom access token revoked");
        } else {
            warn!(
                status = %response.status(),
                "Token revocation may have failed, local token cleared anyway"
            );
        }

        Ok(())
    }

    /// 유효한 토큰이 있는지 확인.
    pub async fn has_valid_token(&self) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.is_valid())
            .unwrap_or(false)
    }

    /// 현재 토큰 만료 시각 반환.
    pub async fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.token.read().await.as_ref().map(|t| t.expires_at)
    }

    /// 설정 반환.
    pub fn config(&self) -> &KiwoomConfig {
        &self.config
    }
}

/// 토큰 발급 응답 본문 해석.
fn parse_token_response(json: &Value) -> Result<TokenState, KiwoomError> {
    match return_code(json) {
        Some(0) => {}
        code => {
            let message = return_msg(json).unwrap_or("토큰 발급 실패").to_string();
            error!(return_code = ?code, message = %message, "Token request returned failure");
            return Err(KiwoomError::Unauthorized(message));
        }
    }

    let access_token = json
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| KiwoomError::Unauthorized("토큰 응답에 token이 없습니다.".to_string()))?;

    let expires_dt = json
        .get("expires_dt")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            KiwoomError::Unauthorized("토큰 응답에 expires_dt가 없습니다.".to_string())
        })?;

    let expires_at = parse_kiwoom_datetime(expires_dt).ok_or_else(|| {
        KiwoomError::Unauthorized(format!("만료 시각 형식이 잘못되었습니다: {}", expires_dt))
    })?;

    let token_type = json
        .get("token_type")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or("Bearer");

    Ok(TokenState::new(
        access_token.to_string(),
        token_type.to_string(),
        expires_at,
    ))
}

/// 키움 날짜시간 형식 파싱 ("YYYYMMDDHHMMSS", KST).
fn parse_kiwoom_datetime(s: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), EXPIRES_DT_FORMAT).ok()?;
    let kst = Seoul.from_local_datetime(&naive).single()?;
    Some(kst.with_timezone(&Utc))
}
