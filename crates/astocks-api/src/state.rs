//! 모든 핸들러에서 공유되는 애플리케이션 상태.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::services::StockService;

/// 애플리케이션 공유 상태.
///
/// `Arc`로 감싸 Axum의 State extractor로 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 주식 시세 서비스
    pub stock_service: Arc<StockService>,

    /// API 버전
    pub version: String,

    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(stock_service: Arc<StockService>) -> Self {
        Self {
            stock_service,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

/// 테스트용 상태 생성.
///
/// 주어진 고정 응답을 돌려주는 시세 공급자를 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state(quote: serde_json::Value) -> AppState {
    use crate::services::QuoteSource;
    use astocks_kiwoom::KiwoomError;

    struct StaticQuote(serde_json::Value);

    #[async_trait::async_trait]
    impl QuoteSource for StaticQuote {
        async fn fetch_stock_price(&self, _code: &str) -> Result<serde_json::Value, KiwoomError> {
            match self.0.get("return_code").and_then(|c| c.as_i64()) {
                Some(code) if code != 0 => Err(KiwoomError::ApiError {
                    code,
                    message: self.0["return_msg"].as_str().unwrap_or_default().to_string(),
                }),
                _ => Ok(self.0.clone()),
            }
        }
    }

    AppState::new(Arc::new(StockService::new(Arc::new(StaticQuote(quote)))))
}
