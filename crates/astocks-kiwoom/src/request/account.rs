//! 계좌 (실현손익) 조회.

use super::{impl_kiwoom_request, today_kst};
use crate::{api_id, path};
use serde::Serialize;

/// 일자별 종목별 실현손익 요청 - 일자 (ka10072).
#[derive(Debug, Clone, Serialize)]
pub struct RealizedProfitByDateRequest {
    /// 종목코드
    pub stk_cd: String,
    /// 시작일자 (YYYYMMDD)
    pub strt_dt: String,
}

impl RealizedProfitByDateRequest {
    /// 오늘(한국 시간) 기준 요청 생성.
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self::on(stock_code, today_kst())
    }

    /// 시작일자를 지정해 요청 생성.
    pub fn on(stock_code: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
            strt_dt: start_date.into(),
        }
    }
}

/// 일자별 종목별 실현손익 요청 - 기간 (ka10073).
#[derive(Debug, Clone, Serialize)]
pub struct RealizedProfitByPeriodRequest {
    /// 종목코드
    pub stk_cd: String,
    /// 시작일자 (YYYYMMDD)
    pub strt_dt: String,
    /// 종료일자 (YYYYMMDD)
    pub end_dt: String,
}

impl RealizedProfitByPeriodRequest {
    pub fn new(
        stock_code: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            stk_cd: stock_code.into(),
            strt_dt: start_date.into(),
            end_dt: end_date.into(),
        }
    }
}

impl_kiwoom_request! {
    RealizedProfitByDateRequest => (api_id::REALIZED_PROFIT_BY_DATE, path::ACCOUNT),
    RealizedProfitByPeriodRequest => (api_id::REALIZED_PROFIT_BY_PERIOD, path::ACCOUNT),
}
