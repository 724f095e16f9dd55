//! 키움증권 REST API 연동.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - OAuth 접근 토큰 발급/캐싱/폐기 ([`KiwoomOAuth`])
//! - 공통 헤더(`api-id`, `cont-yn`, `next-key`)를 붙이고 `return_code`를 검증하는
//!   요청 디스패처 ([`KiwoomClient`])
//! - API ID별 요청 타입 ([`request`])
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use astocks_kiwoom::{KiwoomClient, KiwoomConfig, KiwoomEnvironment};
//! use astocks_kiwoom::request::BasicStockInfoRequest;
//!
//! let config = KiwoomConfig::new("app_key".into(), "secret_key".into(), KiwoomEnvironment::Real);
//! let client = KiwoomClient::from_config(config)?;
//!
//! let info = client.request(&BasicStockInfoRequest::new("005930")).await?;
//! println!("{}", info["stk_nm"]);
//! ```
//!
//! API 문서: <https://openapi.kiwoom.com/>

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

pub use auth::{KiwoomOAuth, TokenState};
pub use client::KiwoomClient;
pub use config::{KiwoomConfig, KiwoomEnvironment};
pub use error::*;
pub use request::KiwoomRequest;
pub use response::{Continuation, KiwoomResponse};

/// 키움 API ID 상수 모음.
///
/// 모든 요청은 `api-id` 헤더로 조회 종류를 지정합니다.
pub mod api_id {
    // ========================================
    // OAuth
    // ========================================

    /// 접근토큰 발급
    pub const TOKEN: &str = "au10001";
    /// 접근토큰 폐기
    pub const REVOKE: &str = "au10002";

    // ========================================
    // 종목정보 (/api/dostk/stkinfo)
    // ========================================

    /// 주식기본정보요청
    pub const BASIC_STOCK_INFO: &str = "ka10001";
    /// 주식거래원요청
    pub const STOCK_TRADING_AGENT: &str = "ka10002";
    /// 체결정보요청
    pub const TRADE_EXECUTION_INFO: &str = "ka10003";
    /// 신용매매동향요청
    pub const CREDIT_TRADING_TREND: &str = "ka10013";
    /// 일별거래상세요청
    pub const DAILY_TRANSACTION_DETAILS: &str = "ka10015";
    /// 신고저가요청
    pub const NEW_HIGH_LOW_PRICE: &str = "ka10016";
    /// 상하한가요청
    pub const UPPER_LOWER_LIMIT_PRICE: &str = "ka10017";
    /// 고저가근접요청
    pub const NEAR_HIGH_LOW_PRICE: &str = "ka10018";
    /// 가격급등락요청
    pub const RAPID_PRICE_CHANGE: &str = "ka10019";
    /// 거래량갱신요청
    pub const TRADING_VOLUME_UPDATE: &str = "ka10024";
    /// 매물대집중요청
    pub const SUPPLY_CONCENTRATION: &str = "ka10025";
    /// 고저PER요청
    pub const HIGH_LOW_PER: &str = "ka10026";
    /// 시가대비등락률요청
    pub const OPENING_PRICE_CHANGE_RATE: &str = "ka10028";
    /// 거래원매물대분석요청
    pub const TRADING_AGENT_SUPPLY_DEMAND: &str = "ka10043";
    /// 거래원순간거래량요청
    pub const TRADING_AGENT_INSTANT_VOLUME: &str = "ka10052";
    /// 변동성완화장치발동종목요청
    pub const VOLATILITY_INTERRUPTION: &str = "ka10054";
    /// 당일전일체결량요청
    pub const TODAY_PREVIOUS_EXECUTION_VOLUME: &str = "ka10055";
    /// 투자자별일별매매종목요청
    pub const INVESTOR_DAILY_TRADING_STOCKS: &str = "ka10058";
    /// 종목별투자자기관별요청
    pub const INVESTOR_INSTITUTION_BY_STOCK: &str = "ka10059";

    // ========================================
    // 계좌 (/api/dostk/acnt)
    // ========================================

    /// 일자별종목별실현손익요청_일자
    pub const REALIZED_PROFIT_BY_DATE: &str = "ka10072";
    /// 일자별종목별실현손익요청_기간
    pub const REALIZED_PROFIT_BY_PERIOD: &str = "ka10073";

    // ========================================
    // 시세 (구 TR)
    // ========================================

    /// 주식 시세 조회
    pub const STOCK_PRICE: &str = "tr10001";
    /// 종목 기본 정보 조회
    pub const STOCK_INFO: &str = "tr10002";
}

/// 요청 경로 상수.
pub mod path {
    /// 접근토큰 발급
    pub const TOKEN: &str = "/oauth2/token";
    /// 접근토큰 폐기
    pub const REVOKE: &str = "/oauth2/revoke";
    /// 종목정보
    pub const STOCK_INFO: &str = "/api/dostk/stkinfo";
    /// 계좌 (경로를 지정하지 않은 요청의 기본값)
    pub const ACCOUNT: &str = "/api/dostk/acnt";
}
