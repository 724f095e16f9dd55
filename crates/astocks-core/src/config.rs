//! 설정 관리.
//!
//! 우선순위 (낮음 → 높음):
//! 1. 코드 기본값
//! 2. 설정 파일 (`config/default.toml`, 없으면 건너뜀)
//! 3. `ASTOCKS__` 접두사 환경 변수 (예: `ASTOCKS__SERVER__PORT=9000`)
//!
//! 키움 인증 정보가 비어 있으면 `KIWOOM_APP_KEY`, `KIWOOM_SECRET_KEY`,
//! `KIWOOM_API_BASE_URL` 환경 변수로 채웁니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::CoreError;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 키움 REST API 설정
    #[serde(default)]
    pub kiwoom: KiwoomSettings,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 전체 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    pub fn socket_addr(&self) -> Result<SocketAddr, CoreError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CoreError::Config(format!("invalid server address: {}", e)))
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// 실전투자 환경으로 인식하는 값.
pub const REAL_ENVIRONMENTS: &[&str] = &["real", "prod", "live"];

/// 모의투자 환경으로 인식하는 값.
pub const MOCK_ENVIRONMENTS: &[&str] = &["mock", "paper", "test"];

/// 키움 REST API 설정 (파일/환경 변수 형태).
///
/// 클라이언트에서 사용하는 `KiwoomConfig`는 이 값으로부터 생성됩니다.
#[derive(Clone, Deserialize, Serialize)]
pub struct KiwoomSettings {
    /// 앱키
    #[serde(default)]
    pub app_key: String,
    /// 시크릿키
    #[serde(default)]
    pub secret_key: String,
    /// 환경 ("real" | "mock")
    #[serde(default = "default_environment")]
    pub environment: String,
    /// 기본 URL 직접 지정 (비어 있으면 환경별 URL 사용)
    #[serde(default)]
    pub base_url: Option<String>,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_kiwoom_timeout")]
    pub timeout_secs: u64,
}

fn default_environment() -> String {
    "real".to_string()
}

fn default_kiwoom_timeout() -> u64 {
    10
}

impl Default for KiwoomSettings {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            secret_key: String::new(),
            environment: default_environment(),
            base_url: None,
            timeout_secs: default_kiwoom_timeout(),
        }
    }
}

impl std::fmt::Debug for KiwoomSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiwoomSettings")
            .field("app_key", &mask(&self.app_key))
            .field("secret_key", &"***")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl KiwoomSettings {
    /// 인증 정보가 모두 설정되었는지 확인.
    pub fn has_credentials(&self) -> bool {
        !self.app_key.trim().is_empty() && !self.secret_key.trim().is_empty()
    }

    /// `environment` 값이 알려진 환경인지 확인 (대소문자 무시).
    pub fn is_known_environment(&self) -> bool {
        let env = self.environment.trim().to_lowercase();
        REAL_ENVIRONMENTS
            .iter()
            .chain(MOCK_ENVIRONMENTS)
            .any(|known| *known == env)
    }

    /// 비어 있는 항목을 `KIWOOM_*` 환경 변수로 채웁니다.
    pub fn fill_from_env(&mut self) {
        if self.app_key.is_empty() {
            if let Ok(key) = std::env::var("KIWOOM_APP_KEY") {
                self.app_key = key;
            }
        }
        if self.secret_key.is_empty() {
            if let Ok(secret) = std::env::var("KIWOOM_SECRET_KEY") {
                self.secret_key = secret;
            }
        }
        if self.base_url.is_none() {
            self.base_url = std::env::var("KIWOOM_API_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty());
        }
    }
}

/// 로그 출력용으로 앞 4자리만 남깁니다.
pub fn mask(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    if value.chars().count() > 4 {
        format!("{}***", prefix)
    } else {
        "***".to_string()
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("ASTOCKS")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: AppConfig = builder.build()?.try_deserialize()?;
        config.kiwoom.fill_from_env();
        config.validate()?;
        Ok(config)
    }

    /// `.env`를 읽은 뒤 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// 설정 값 검증.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.server.port == 0 {
            return Err(CoreError::Config("server.port must not be 0".to_string()));
        }
        if self.kiwoom.timeout_secs == 0 {
            return Err(CoreError::Config(
                "kiwoom.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !self.kiwoom.is_known_environment() {
            return Err(CoreError::Config(format!(
                "unknown kiwoom.environment '{}' (expected one of: {})",
                self.kiwoom.environment,
                REAL_ENVIRONMENTS
                    .iter()
                    .chain(MOCK_ENVIRONMENTS)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
        Ok(())
    }
}
