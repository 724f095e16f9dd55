//! 키움증권 REST API 설정.
//!
//! 앱키/시크릿키를 사용한 OAuth 인증이 필요합니다.
//! 실전투자와 모의투자는 서로 다른 도메인을 사용합니다.

use astocks_core::config::{mask, KiwoomSettings, MOCK_ENVIRONMENTS, REAL_ENVIRONMENTS};
use serde::{Deserialize, Serialize};

/// 요청 타임아웃 기본값 (초).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 키움 API 환경.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KiwoomEnvironment {
    /// 실전투자
    #[default]
    Real,
    /// 모의투자
    Mock,
}

impl KiwoomEnvironment {
    /// 이 환경의 REST API 기본 URL 반환.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            KiwoomEnvironment::Real => "https://api.kiwoom.com",
            KiwoomEnvironment::Mock => "https://mockapi.kiwoom.com",
        }
    }

    /// 문자열에서 파싱.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if REAL_ENVIRONMENTS.contains(&s.as_str()) {
            Some(KiwoomEnvironment::Real)
        } else if MOCK_ENVIRONMENTS.contains(&s.as_str()) {
            Some(KiwoomEnvironment::Mock)
        } else {
            None
        }
    }
}

/// 키움 API 설정.
#[derive(Clone, Serialize, Deserialize)]
pub struct KiwoomConfig {
    /// 앱키
    pub app_key: String,
    /// 시크릿키
    pub app_secret: String,
    /// 환경 (실전/모의)
    pub environment: KiwoomEnvironment,
    /// 기본 URL 직접 지정 (게이트웨이 프록시, 테스트 서버 등)
    pub base_url_override: Option<String>,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl std::fmt::Debug for KiwoomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiwoomConfig")
            .field("app_key", &mask(&self.app_key))
            .field("app_secret", &"***")
            .field("environment", &self.environment)
            .field("base_url_override", &self.base_url_override)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl KiwoomConfig {
    /// 새로운 키움 설정 생성.
    pub fn new(app_key: String, app_secret: String, environment: KiwoomEnvironment) -> Self {
        Self {
            app_key,
            app_secret,
            environment,
            base_url_override: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// 기본 URL 직접 지정.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// 요청 타임아웃 설정.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 설정 파일의 `[kiwoom]` 섹션에서 생성.
    ///
    /// 인증 정보가 비어 있으면 `None`을 반환합니다.
    pub fn from_settings(settings: &KiwoomSettings) -> Option<Self> {
        if !settings.has_credentials() {
            return None;
        }

        Some(Self {
            app_key: settings.app_key.clone(),
            app_secret: settings.secret_key.clone(),
            environment: KiwoomEnvironment::parse(&settings.environment).unwrap_or_default(),
            base_url_override: settings.base_url.clone(),
            timeout_secs: settings.timeout_secs,
        })
    }

    /// REST API 기본 URL 반환 (끝의 `/` 제거).
    pub fn rest_base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.rest_base_url())
            .trim_end_matches('/')
    }

    /// 경로를 붙인 전체 URL 반환.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.rest_base_url(), path)
    }
}
