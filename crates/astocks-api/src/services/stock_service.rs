//! 주식 시세 조회 서비스.
//!
//! 벤더 시세 응답(tr10001)을 API 응답 형식으로 변환합니다.
//!
//! | 벤더 필드              | 응답 필드        |
//! |------------------------|------------------|
//! | `name`                 | `name`           |
//! | `price`                | `current_price`  |
//! | `prev_close`           | `previous_close` |
//! | `price_change`         | `change`         |
//! | `price_change_percent` | `change_percent` |
//! | `volume`               | `volume`         |

use astocks_kiwoom::request::StockPriceRequest;
use astocks_kiwoom::{KiwoomClient, KiwoomError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use utoipa::ToSchema;

/// 응답 시각 형식 (로컬 시간).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 시세 원본 데이터 공급자.
///
/// 운영에서는 [`KiwoomClient`], 테스트에서는 고정 응답을 사용합니다.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// 종목 시세 원본 JSON 조회.
    async fn fetch_stock_price(&self, code: &str) -> Result<Value, KiwoomError>;
}

#[async_trait]
impl QuoteSource for KiwoomClient {
    async fn fetch_stock_price(&self, code: &str) -> Result<Value, KiwoomError> {
        self.request(&StockPriceRequest::new(code)).await
    }
}

/// 주식 시세 응답.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockQuote {
    /// 종목코드
    #[schema(example = "005930")]
    pub code: String,
    /// 종목명
    #[schema(example = "삼성전자")]
    pub name: Option<String>,
    /// 현재가
    pub current_price: f64,
    /// 전일 종가
    pub previous_close: f64,
    /// 전일 대비
    pub change: f64,
    /// 전일 대비 등락률 (%)
    pub change_percent: f64,
    /// 거래량
    pub volume: i64,
    /// 조회 시각 ("YYYY-MM-DD HH:MM:SS", 서버 로컬 시간)
    #[schema(example = "2024-11-07 13:05:42")]
    pub timestamp: String,
}

/// 시세 조회 에러.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("주식 시세 조회 중 오류 발생: 종목코드가 비어 있습니다")]
    InvalidCode,

    #[error("주식 시세 조회 중 오류 발생: {0}")]
    Vendor(#[from] KiwoomError),

    #[error("주식 시세 조회 중 오류 발생: 응답에 {0} 필드가 없습니다")]
    MissingField(&'static str),

    #[error("주식 시세 조회 중 오류 발생: {field} 값을 해석할 수 없습니다 ({value})")]
    InvalidField { field: &'static str, value: String },
}

impl ServiceError {
    /// 로그용 에러 분류.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::InvalidCode => "invalid_input",
            ServiceError::Vendor(e) => e.kind().as_str(),
            ServiceError::MissingField(_) | ServiceError::InvalidField { .. } => "malformed_quote",
        }
    }
}

/// 주식 시세 서비스.
pub struct StockService {
    source: Arc<dyn QuoteSource>,
}

impl StockService {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// 종목 시세 조회.
    ///
    /// 벤더 호출은 한 번만 하며 결과를 저장하지 않습니다.
    pub async fn get_stock_price(&self, code: &str) -> Result<StockQuote, ServiceError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ServiceError::InvalidCode);
        }

        let raw = self.source.fetch_stock_price(code).await?;
        debug!(code, "Stock price fetched");

        let quote = StockQuote {
            code: code.to_string(),
            name: raw
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            current_price: number_field(&raw, "price")?.abs(),
            previous_close: number_field(&raw, "prev_close")?.abs(),
            change: number_field(&raw, "price_change")?,
            change_percent: number_field(&raw, "price_change_percent")?,
            volume: number_field(&raw, "volume")?.abs().round() as i64,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        Ok(quote)
    }
}

/// 숫자 필드 추출.
///
/// 벤더는 숫자를 JSON 숫자 또는 부호(`+`/`-`)와 천 단위 구분자가 붙은
/// 문자열로 내려줍니다.
fn number_field(raw: &Value, field: &'static str) -> Result<f64, ServiceError> {
    let value = raw.get(field).ok_or(ServiceError::MissingField(field))?;

    parse_number(value).ok_or_else(|| {
        warn!(field, value = %value, "Unparseable numeric field in quote");
        ServiceError::InvalidField {
            field,
            value: value.to_string(),
        }
    })
}

fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned = s.trim().replace(',', "");
            let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    parsed.is_finite().then_some(parsed)
}
