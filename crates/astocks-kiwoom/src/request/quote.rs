//! 시세 조회 (tr10001, tr10002).

use super::impl_kiwoom_request;
use crate::{api_id, path};
use serde::Serialize;

/// 주식 시세 조회 (tr10001).
#[derive(Debug, Clone, Serialize)]
pub struct StockPriceRequest {
    /// 종목코드
    pub stock_code: String,
}

impl StockPriceRequest {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
        }
    }
}

/// 종목 기본 정보 조회 (tr10002).
#[derive(Debug, Clone, Serialize)]
pub struct StockInfoRequest {
    /// 종목코드
    pub stock_code: String,
}

impl StockInfoRequest {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
        }
    }
}

impl_kiwoom_request! {
    StockPriceRequest => (api_id::STOCK_PRICE, path::ACCOUNT),
    StockInfoRequest => (api_id::STOCK_INFO, path::ACCOUNT),
}
