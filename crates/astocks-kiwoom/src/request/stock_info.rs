//! 종목정보 조회 (`/api/dostk/stkinfo`).
//!
//! 순위/조건 검색 계열 요청은 식별자가 없으므로 `Default`로 생성합니다.

use super::{exchange, impl_kiwoom_request, market};
use crate::{api_id, path};
use serde::Serialize;

// ========================================
// 종목 단위 조회
// ========================================

/// 주식기본정보요청 (ka10001).
#[derive(Debug, Clone, Serialize)]
pub struct BasicStockInfoRequest {
    /// 종목코드 (예: "005930")
    pub stk_cd: String,
}

impl BasicStockInfoRequest {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
        }
    }
}

/// 주식거래원요청 (ka10002).
///
/// 매도/매수 상위 5개 거래원과 수량을 반환합니다.
#[derive(Debug, Clone, Serialize)]
pub struct StockTradingAgentRequest {
    pub stk_cd: String,
}

impl StockTradingAgentRequest {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
        }
    }
}

/// 체결정보요청 (ka10003). 응답 목록 키: `cntr_infr`.
#[derive(Debug, Clone, Serialize)]
pub struct TradeExecutionInfoRequest {
    pub stk_cd: String,
}

impl TradeExecutionInfoRequest {
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
        }
    }
}

/// 신용매매동향요청 (ka10013). 응답 목록 키: `crd_trend`.
#[derive(Debug, Clone, Serialize)]
pub struct CreditTradingTrendRequest {
    /// 종목코드
    pub stk_cd: String,
    /// 일자 (YYYYMMDD)
    pub dt: String,
    /// 조회구분 (1: 융자, 2: 대주)
    pub qry_tp: String,
}

impl CreditTradingTrendRequest {
    pub fn new(
        stock_code: impl Into<String>,
        date: impl Into<String>,
        query_type: impl Into<String>,
    ) -> Self {
        Self {
            stk_cd: stock_code.into(),
            dt: date.into(),
            qry_tp: query_type.into(),
        }
    }
}

/// 일별거래상세요청 (ka10015). 응답 목록 키: `daly_trde_dtl`.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTransactionDetailsRequest {
    /// 종목코드
    pub stk_cd: String,
    /// 시작일자 (YYYYMMDD)
    pub strt_dt: String,
}

impl DailyTransactionDetailsRequest {
    pub fn new(stock_code: impl Into<String>, start_date: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
            strt_dt: start_date.into(),
        }
    }
}

/// 당일전일체결량요청 (ka10055). 응답 목록 키: `tdy_pred_cntr_qty`.
#[derive(Debug, Clone, Serialize)]
pub struct TodayPreviousExecutionVolumeRequest {
    /// 종목코드
    pub stk_cd: String,
    /// 당일전일 (1: 당일, 2: 전일)
    pub tdy_pred: String,
}

impl TodayPreviousExecutionVolumeRequest {
    /// 전일 체결량 조회.
    pub fn new(stock_code: impl Into<String>) -> Self {
        Self {
            stk_cd: stock_code.into(),
            tdy_pred: "2".to_string(),
        }
    }

    /// 당일 체결량 조회로 변경.
    pub fn today(mut self) -> Self {
        self.tdy_pred = "1".to_string();
        self
    }
}

/// 종목별투자자기관별요청 (ka10059).
#[derive(Debug, Clone, Serialize)]
pub struct InvestorInstitutionByStockRequest {
    /// 일자 (YYYYMMDD)
    pub dt: String,
    /// 종목코드
    pub stk_cd: String,
    /// 금액수량구분 (1: 금액, 2: 수량)
    pub amt_qty_tp: String,
    /// 매매구분 (0: 순매수, 1: 매수, 2: 매도)
    pub trde_tp: String,
    /// 단위구분 (1000: 천주, 1: 단주)
    pub unit_tp: String,
}

impl InvestorInstitutionByStockRequest {
    pub fn new(date: impl Into<String>, stock_code: impl Into<String>) -> Self {
        Self {
            dt: date.into(),
            stk_cd: stock_code.into(),
            amt_qty_tp: "1".to_string(),
            trde_tp: "0".to_string(),
            unit_tp: "1000".to_string(),
        }
    }
}

// ========================================
// 거래원
// ========================================

/// 거래원매물대분석요청 (ka10043).
#[derive(Debug, Clone, Serialize)]
pub struct TradingAgentSupplyDemandRequest {
    pub stk_cd: String,
    /// 시작일자 (YYYYMMDD)
    pub strt_dt: String,
    /// 종료일자 (YYYYMMDD)
    pub end_dt: String,
    /// 조회기간구분 (0: 기간으로 조회, 1: 시작일자/종료일자로 조회)
    pub qry_dt_tp: String,
    /// 시점구분 (0: 당일, 1: 전일)
    pub pot_tp: String,
    /// 기간 (일)
    pub dt: String,
    /// 정렬기준 (1: 종가순, 2: 날짜순)
    pub sort_base: String,
    /// 회원사코드
    pub mmcm_cd: String,
    pub stex_tp: String,
}

impl TradingAgentSupplyDemandRequest {
    pub fn new(
        stock_code: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        member_code: impl Into<String>,
    ) -> Self {
        Self {
            stk_cd: stock_code.into(),
            strt_dt: start_date.into(),
            end_dt: end_date.into(),
            qry_dt_tp: "0".to_string(),
            pot_tp: "0".to_string(),
            dt: "5".to_string(),
            sort_base: "1".to_string(),
            mmcm_cd: member_code.into(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 거래원순간거래량요청 (ka10052).
#[derive(Debug, Clone, Serialize)]
pub struct TradingAgentInstantVolumeRequest {
    /// 회원사코드
    pub mmcm_cd: String,
    /// 종목코드 (빈 문자열이면 전체)
    pub stk_cd: String,
    /// 시장구분 (0: 전체, 1: 코스피, 2: 코스닥, 3: 종목)
    pub mrkt_tp: String,
    /// 수량구분 (0: 전체)
    pub qty_tp: String,
    /// 가격구분 (0: 전체)
    pub pric_tp: String,
    pub stex_tp: String,
}

impl TradingAgentInstantVolumeRequest {
    pub fn new(member_code: impl Into<String>) -> Self {
        Self {
            mmcm_cd: member_code.into(),
            stk_cd: String::new(),
            mrkt_tp: "0".to_string(),
            qty_tp: "0".to_string(),
            pric_tp: "0".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }

    /// 특정 종목으로 한정.
    pub fn for_stock(mut self, stock_code: impl Into<String>) -> Self {
        self.stk_cd = stock_code.into();
        self.mrkt_tp = "3".to_string();
        self
    }
}

// ========================================
// 순위/조건 검색
// ========================================

/// 신고저가요청 (ka10016). 응답 목록 키: `ntl_pric`.
#[derive(Debug, Clone, Serialize)]
pub struct NewHighLowPriceRequest {
    /// 시장구분 (000: 전체, 001: 코스피, 101: 코스닥)
    pub mrkt_tp: String,
    /// 신고저구분 (1: 신고가, 2: 신저가)
    pub ntl_tp: String,
    /// 고저종구분 (1: 고저기준, 2: 종가기준)
    pub high_low_close_tp: String,
    /// 종목조건 (0: 전체조회)
    pub stk_cnd: String,
    /// 거래량구분 (00000: 전체조회)
    pub trde_qty_tp: String,
    /// 신용조건 (0: 전체조회)
    pub crd_cnd: String,
    /// 상하한포함 (0: 미포함, 1: 포함)
    pub updown_incls: String,
    /// 기간 (5, 10, 20, 60, 250일)
    pub dt: String,
    /// 거래소구분 (1: KRX, 2: NXT, 3: 통합)
    pub stex_tp: String,
}

impl Default for NewHighLowPriceRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::KOSPI.to_string(),
            ntl_tp: "1".to_string(),
            high_low_close_tp: "1".to_string(),
            stk_cnd: "0".to_string(),
            trde_qty_tp: "00000".to_string(),
            crd_cnd: "0".to_string(),
            updown_incls: "0".to_string(),
            dt: "5".to_string(),
            stex_tp: exchange::KRX.to_string(),
        }
    }
}

/// 상하한가요청 (ka10017). 응답 목록 키: `updown_pric`.
#[derive(Debug, Clone, Serialize)]
pub struct UpperLowerLimitPriceRequest {
    pub mrkt_tp: String,
    /// 상하한구분 (1: 상한, 2: 상승, 3: 보합, 4: 하한, 5: 하락, 6: 전일상한, 7: 전일하한)
    pub updown_tp: String,
    /// 정렬구분 (1: 종목코드순, 2: 연속횟수순, 3: 등락률순)
    pub sort_tp: String,
    pub stk_cnd: String,
    pub trde_qty_tp: String,
    pub crd_cnd: String,
    /// 매매금구분 (0: 전체조회)
    pub trde_gold_tp: String,
    pub stex_tp: String,
}

impl Default for UpperLowerLimitPriceRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::KOSPI.to_string(),
            updown_tp: "1".to_string(),
            sort_tp: "3".to_string(),
            stk_cnd: "0".to_string(),
            trde_qty_tp: "00010".to_string(),
            crd_cnd: "0".to_string(),
            trde_gold_tp: "0".to_string(),
            stex_tp: exchange::KRX.to_string(),
        }
    }
}

/// 고저가근접요청 (ka10018). 응답 목록 키: `high_low_pric_alacc`.
#[derive(Debug, Clone, Serialize)]
pub struct NearHighLowPriceRequest {
    /// 고저구분 (1: 고가, 2: 저가)
    pub high_low_tp: String,
    /// 근접율 (05: 0.5%, 10: 1.0%, ... 50: 5.0%)
    pub alacc_rt: String,
    pub mrkt_tp: String,
    pub trde_qty_tp: String,
    pub stk_cnd: String,
    pub crd_cnd: String,
    pub stex_tp: String,
}

impl Default for NearHighLowPriceRequest {
    fn default() -> Self {
        Self {
            high_low_tp: "1".to_string(),
            alacc_rt: "05".to_string(),
            mrkt_tp: market::ALL.to_string(),
            trde_qty_tp: "0000".to_string(),
            stk_cnd: "0".to_string(),
            crd_cnd: "0".to_string(),
            stex_tp: exchange::KRX.to_string(),
        }
    }
}

/// 가격급등락요청 (ka10019). 응답 목록 키: `pric_jmpflu`.
#[derive(Debug, Clone, Serialize)]
pub struct RapidPriceChangeRequest {
    pub mrkt_tp: String,
    /// 등락구분 (1: 급등, 2: 급락)
    pub flu_tp: String,
    /// 시간구분 (1: 분전, 2: 일전)
    pub tm_tp: String,
    /// 시간 (분 또는 일)
    pub tm: String,
    pub trde_qty_tp: String,
    pub stk_cnd: String,
    pub crd_cnd: String,
    /// 가격조건 (0: 전체조회)
    pub pric_cnd: String,
    pub updown_incls: String,
    pub stex_tp: String,
}

impl Default for RapidPriceChangeRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::ALL.to_string(),
            flu_tp: "1".to_string(),
            tm_tp: "1".to_string(),
            tm: "60".to_string(),
            trde_qty_tp: "0000".to_string(),
            stk_cnd: "0".to_string(),
            crd_cnd: "0".to_string(),
            pric_cnd: "0".to_string(),
            updown_incls: "1".to_string(),
            stex_tp: exchange::KRX.to_string(),
        }
    }
}

/// 거래량갱신요청 (ka10024).
#[derive(Debug, Clone, Serialize)]
pub struct TradingVolumeUpdateRequest {
    pub mrkt_tp: String,
    /// 주기구분 (5, 10, 20, 60, 250일)
    pub cycle_tp: String,
    /// 거래량구분 (5: 5천주이상, 10: 만주이상, ...)
    pub trde_qty_tp: String,
    pub stex_tp: String,
}

impl Default for TradingVolumeUpdateRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::ALL.to_string(),
            cycle_tp: "5".to_string(),
            trde_qty_tp: "5".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 매물대집중요청 (ka10025).
#[derive(Debug, Clone, Serialize)]
pub struct SupplyConcentrationRequest {
    pub mrkt_tp: String,
    /// 매물집중비율 (0~100)
    pub prps_cnctr_rt: String,
    /// 현재가진입 (0: 미포함, 1: 포함)
    pub cur_prc_entry: String,
    /// 매물대수
    pub prpscnt: String,
    /// 주기구분 (50, 100, 150, 200, 250, 300일)
    pub cycle_tp: String,
    pub stex_tp: String,
}

impl Default for SupplyConcentrationRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::ALL.to_string(),
            prps_cnctr_rt: "50".to_string(),
            cur_prc_entry: "0".to_string(),
            prpscnt: "10".to_string(),
            cycle_tp: "50".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 고저PER요청 (ka10026). 응답 목록 키: `high_low_per`.
#[derive(Debug, Clone, Serialize)]
pub struct HighLowPerRequest {
    /// PER구분 (1: 저PBR, 2: 고PBR, 3: 저PER, 4: 고PER, 5: 저ROE, 6: 고ROE)
    pub pertp: String,
    pub stex_tp: String,
}

impl Default for HighLowPerRequest {
    fn default() -> Self {
        Self {
            pertp: "1".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 시가대비등락률요청 (ka10028).
#[derive(Debug, Clone, Serialize)]
pub struct OpeningPriceChangeRateRequest {
    /// 정렬구분 (1: 시가, 2: 고가, 3: 저가, 4: 기준가)
    pub sort_tp: String,
    /// 거래량조건 (0000: 전체조회)
    pub trde_qty_cnd: String,
    pub mrkt_tp: String,
    pub updown_incls: String,
    pub stk_cnd: String,
    pub crd_cnd: String,
    /// 거래대금조건 (0: 전체조회)
    pub trde_prica_cnd: String,
    /// 등락조건 (1: 상위, 2: 하위)
    pub flu_cnd: String,
    pub stex_tp: String,
}

impl Default for OpeningPriceChangeRateRequest {
    fn default() -> Self {
        Self {
            sort_tp: "1".to_string(),
            trde_qty_cnd: "0000".to_string(),
            mrkt_tp: market::ALL.to_string(),
            updown_incls: "1".to_string(),
            stk_cnd: "0".to_string(),
            crd_cnd: "0".to_string(),
            trde_prica_cnd: "0".to_string(),
            flu_cnd: "1".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 변동성완화장치발동종목요청 (ka10054).
#[derive(Debug, Clone, Serialize)]
pub struct VolatilityInterruptionRequest {
    pub mrkt_tp: String,
    /// 장전구분 (0: 전체, 1: 정규시장, 2: 시간외단일가)
    pub bf_mkrt_tp: String,
    /// 종목코드 (빈 문자열이면 전체)
    pub stk_cd: String,
    /// 발동구분 (0: 전체, 1: 정적VI, 2: 동적VI, 3: 동적VI + 정적VI)
    pub motn_tp: String,
    /// 제외종목 (9자리 플래그, 000000000: 전종목포함)
    pub skip_stk: String,
    pub trde_qty_tp: String,
    pub min_trde_qty: String,
    pub max_trde_qty: String,
    pub trde_prica_tp: String,
    pub min_trde_prica: String,
    pub max_trde_prica: String,
    /// 발동방향 (0: 전체, 1: 상승, 2: 하락)
    pub motn_drc: String,
    pub stex_tp: String,
}

impl Default for VolatilityInterruptionRequest {
    fn default() -> Self {
        Self {
            mrkt_tp: market::ALL.to_string(),
            bf_mkrt_tp: "0".to_string(),
            stk_cd: String::new(),
            motn_tp: "0".to_string(),
            skip_stk: "000000000".to_string(),
            trde_qty_tp: "0".to_string(),
            min_trde_qty: "0".to_string(),
            max_trde_qty: "0".to_string(),
            trde_prica_tp: "0".to_string(),
            min_trde_prica: "0".to_string(),
            max_trde_prica: "0".to_string(),
            motn_drc: "0".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

/// 투자자별일별매매종목요청 (ka10058).
#[derive(Debug, Clone, Serialize)]
pub struct InvestorDailyTradingStocksRequest {
    /// 시작일자 (YYYYMMDD)
    pub strt_dt: String,
    /// 종료일자 (YYYYMMDD)
    pub end_dt: String,
    /// 매매구분 (1: 순매도, 2: 순매수)
    pub trde_tp: String,
    /// 시장구분 (001: 코스피, 101: 코스닥)
    pub mrkt_tp: String,
    /// 투자자구분 (8000: 개인, 9000: 외국인, 1000: 금융투자, ...)
    pub invsr_tp: String,
    pub stex_tp: String,
}

impl InvestorDailyTradingStocksRequest {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            strt_dt: start_date.into(),
            end_dt: end_date.into(),
            trde_tp: "2".to_string(),
            mrkt_tp: market::KOSDAQ.to_string(),
            invsr_tp: "8000".to_string(),
            stex_tp: exchange::UNIFIED.to_string(),
        }
    }
}

impl_kiwoom_request! {
    BasicStockInfoRequest => (api_id::BASIC_STOCK_INFO, path::STOCK_INFO),
    StockTradingAgentRequest => (api_id::STOCK_TRADING_AGENT, path::STOCK_INFO),
    TradeExecutionInfoRequest => (api_id::TRADE_EXECUTION_INFO, path::STOCK_INFO),
    CreditTradingTrendRequest => (api_id::CREDIT_TRADING_TREND, path::STOCK_INFO),
    DailyTransactionDetailsRequest => (api_id::DAILY_TRANSACTION_DETAILS, path::STOCK_INFO),
    NewHighLowPriceRequest => (api_id::NEW_HIGH_LOW_PRICE, path::STOCK_INFO),
    UpperLowerLimitPriceRequest => (api_id::UPPER_LOWER_LIMIT_PRICE, path::STOCK_INFO),
    NearHighLowPriceRequest => (api_id::NEAR_HIGH_LOW_PRICE, path::STOCK_INFO),
    RapidPriceChangeRequest => (api_id::RAPID_PRICE_CHANGE, path::STOCK_INFO),
    TradingVolumeUpdateRequest => (api_id::TRADING_VOLUME_UPDATE, path::STOCK_INFO),
    SupplyConcentrationRequest => (api_id::SUPPLY_CONCENTRATION, path::STOCK_INFO),
    HighLowPerRequest => (api_id::HIGH_LOW_PER, path::STOCK_INFO),
    OpeningPriceChangeRateRequest => (api_id::OPENING_PRICE_CHANGE_RATE, path::STOCK_INFO),
    TradingAgentSupplyDemandRequest => (api_id::TRADING_AGENT_SUPPLY_DEMAND, path::STOCK_INFO),
    TradingAgentInstantVolumeRequest => (api_id::TRADING_AGENT_INSTANT_VOLUME, path::STOCK_INFO),
    VolatilityInterruptionRequest => (api_id::VOLATILITY_INTERRUPTION, path::STOCK_INFO),
    TodayPreviousExecutionVolumeRequest => (api_id::TODAY_PREVIOUS_EXECUTION_VOLUME, path::STOCK_INFO),
    InvestorDailyTradingStocksRequest => (api_id::INVESTOR_DAILY_TRADING_STOCKS, path::STOCK_INFO),
    InvestorInstitutionByStockRequest => (api_id::INVESTOR_INSTITUTION_BY_STOCK, path::STOCK_INFO),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::KiwoomRequest;
    use serde_json::{json, Value};

    fn payload<R: KiwoomRequest>(request: &R) -> Value {
        serde_json::to_value(request).unwrap()
    }

    #[test]
    fn test_stock_code_maps_to_stk_cd() {
        assert_eq!(
            payload(&BasicStockInfoRequest::new("005930")),
            json!({"stk_cd": "005930"})
        );
        assert_eq!(
            payload(&StockTradingAgentRequest::new("005930")),
            json!({"stk_cd": "005930"})
        );
        assert_eq!(
            payload(&TradeExecutionInfoRequest::new("005930")),
            json!({"stk_cd": "005930"})
        );
    }

    #[test]
    fn test_credit_trading_trend_payload() {
        assert_eq!(
            payload(&CreditTradingTrendRequest::new("005930", "20241104", "1")),
            json!({"stk_cd": "005930", "dt": "20241104", "qry_tp": "1"})
        );
    }

    #[test]
    fn test_daily_transaction_details_payload() {
        assert_eq!(
            payload(&DailyTransactionDetailsRequest::new("005930", "20241105")),
            json!({"stk_cd": "005930", "strt_dt": "20241105"})
        );
    }

    #[test]
    fn test_new_high_low_defaults() {
        assert_eq!(
            payload(&NewHighLowPriceRequest::default()),
            json!({
                "mrkt_tp": "001",
                "ntl_tp": "1",
                "high_low_close_tp": "1",
                "stk_cnd": "0",
                "trde_qty_tp": "00000",
                "crd_cnd": "0",
                "updown_incls": "0",
                "dt": "5",
                "stex_tp": "1"
            })
        );
    }

    #[test]
    fn test_upper_lower_limit_defaults() {
        assert_eq!(
            payload(&UpperLowerLimitPriceRequest::default()),
            json!({
                "mrkt_tp": "001",
                "updown_tp": "1",
                "sort_tp": "3",
                "stk_cnd": "0",
                "trde_qty_tp": "00010",
                "crd_cnd": "0",
                "trde_gold_tp": "0",
                "stex_tp": "1"
            })
        );
    }

    #[test]
    fn test_ranking_defaults_can_be_overridden() {
        let request = UpperLowerLimitPriceRequest {
            mrkt_tp: market::KOSDAQ.to_string(),
            updown_tp: "4".to_string(),
            ..Default::default()
        };
        let value = payload(&request);

        assert_eq!(value["mrkt_tp"], "101");
        assert_eq!(value["updown_tp"], "4");
        assert_eq!(value["trde_qty_tp"], "00010");
    }

    #[test]
    fn test_near_high_low_defaults() {
        assert_eq!(
            payload(&NearHighLowPriceRequest::default()),
            json!({
                "high_low_tp": "1",
                "alacc_rt": "05",
                "mrkt_tp": "000",
                "trde_qty_tp": "0000",
                "stk_cnd": "0",
                "crd_cnd": "0",
                "stex_tp": "1"
            })
        );
    }

    #[test]
    fn test_rapid_price_change_defaults() {
        assert_eq!(
            payload(&RapidPriceChangeRequest::default()),
            json!({
                "mrkt_tp": "000",
                "flu_tp": "1",
                "tm_tp": "1",
                "tm": "60",
                "trde_qty_tp": "0000",
                "stk_cnd": "0",
                "crd_cnd": "0",
                "pric_cnd": "0",
                "updown_incls": "1",
                "stex_tp": "1"
            })
        );
    }

    #[test]
    fn test_volume_and_concentration_defaults() {
        assert_eq!(
            payload(&TradingVolumeUpdateRequest::default()),
            json!({
                "mrkt_tp": "000",
                "cycle_tp": "5",
                "trde_qty_tp": "5",
                "stex_tp": "3"
            })
        );
        assert_eq!(
            payload(&SupplyConcentrationRequest::default()),
            json!({
                "mrkt_tp": "000",
                "prps_cnctr_rt": "50",
                "cur_prc_entry": "0",
                "prpscnt": "10",
                "cycle_tp": "50",
                "stex_tp": "3"
            })
        );
    }

    #[test]
    fn test_high_low_per_defaults() {
        assert_eq!(
            payload(&HighLowPerRequest::default()),
            json!({"pertp": "1", "stex_tp": "3"})
        );
    }

    #[test]
    fn test_opening_price_change_rate_defaults() {
        assert_eq!(
            payload(&OpeningPriceChangeRateRequest::default()),
            json!({
                "sort_tp": "1",
                "trde_qty_cnd": "0000",
                "mrkt_tp": "000",
                "updown_incls": "1",
                "stk_cnd": "0",
                "crd_cnd": "0",
                "trde_prica_cnd": "0",
                "flu_cnd": "1",
                "stex_tp": "3"
            })
        );
    }

    #[test]
    fn test_volatility_interruption_defaults() {
        assert_eq!(
            payload(&VolatilityInterruptionRequest::default()),
            json!({
                "mrkt_tp": "000",
                "bf_mkrt_tp": "0",
                "stk_cd": "",
                "motn_tp": "0",
                "skip_stk": "000000000",
                "trde_qty_tp": "0",
                "min_trde_qty": "0",
                "max_trde_qty": "0",
                "trde_prica_tp": "0",
                "min_trde_prica": "0",
                "max_trde_prica": "0",
                "motn_drc": "0",
                "stex_tp": "3"
            })
        );
    }

    #[test]
    fn test_trading_agent_requests() {
        assert_eq!(
            payload(&TradingAgentSupplyDemandRequest::new(
                "005930", "20241031", "20241107", "36"
            )),
            json!({
                "stk_cd": "005930",
                "strt_dt": "20241031",
                "end_dt": "20241107",
                "qry_dt_tp": "0",
                "pot_tp": "0",
                "dt": "5",
                "sort_base": "1",
                "mmcm_cd": "36",
                "stex_tp": "3"
            })
        );

        let instant = TradingAgentInstantVolumeRequest::new("888");
        assert_eq!(
            payload(&instant),
            json!({
                "mmcm_cd": "888",
                "stk_cd": "",
                "mrkt_tp": "0",
                "qty_tp": "0",
                "pric_tp": "0",
                "stex_tp": "3"
            })
        );
        let for_stock = instant.for_stock("005930");
        assert_eq!(for_stock.stk_cd, "005930");
        assert_eq!(for_stock.mrkt_tp, "3");
    }

    #[test]
    fn test_investor_requests() {
        assert_eq!(
            payload(&InvestorDailyTradingStocksRequest::new("20241106", "20241107")),
            json!({
                "strt_dt": "20241106",
                "end_dt": "20241107",
                "trde_tp": "2",
                "mrkt_tp": "101",
                "invsr_tp": "8000",
                "stex_tp": "3"
            })
        );
        assert_eq!(
            payload(&InvestorInstitutionByStockRequest::new("20241107", "005930")),
            json!({
                "dt": "20241107",
                "stk_cd": "005930",
                "amt_qty_tp": "1",
                "trde_tp": "0",
                "unit_tp": "1000"
            })
        );
    }

    #[test]
    fn test_today_previous_execution_volume() {
        let previous = TodayPreviousExecutionVolumeRequest::new("005930");
        assert_eq!(
            payload(&previous),
            json!({"stk_cd": "005930", "tdy_pred": "2"})
        );
        assert_eq!(
            payload(&previous.today()),
            json!({"stk_cd": "005930", "tdy_pred": "1"})
        );
    }

    fn route<R: KiwoomRequest>() -> (&'static str, &'static str) {
        (R::API_ID, R::PATH)
    }

    #[test]
    fn test_api_ids_and_paths() {
        let routes = [
            (route::<BasicStockInfoRequest>(), "ka10001"),
            (route::<StockTradingAgentRequest>(), "ka10002"),
            (route::<TradeExecutionInfoRequest>(), "ka10003"),
            (route::<CreditTradingTrendRequest>(), "ka10013"),
            (route::<DailyTransactionDetailsRequest>(), "ka10015"),
            (route::<NewHighLowPriceRequest>(), "ka10016"),
            (route::<UpperLowerLimitPriceRequest>(), "ka10017"),
            (route::<NearHighLowPriceRequest>(), "ka10018"),
            (route::<RapidPriceChangeRequest>(), "ka10019"),
            (route::<TradingVolumeUpdateRequest>(), "ka10024"),
            (route::<SupplyConcentrationRequest>(), "ka10025"),
            (route::<HighLowPerRequest>(), "ka10026"),
            (route::<OpeningPriceChangeRateRequest>(), "ka10028"),
            (route::<TradingAgentSupplyDemandRequest>(), "ka10043"),
            (route::<TradingAgentInstantVolumeRequest>(), "ka10052"),
            (route::<VolatilityInterruptionRequest>(), "ka10054"),
            (route::<TodayPreviousExecutionVolumeRequest>(), "ka10055"),
            (route::<InvestorDailyTradingStocksRequest>(), "ka10058"),
            (route::<InvestorInstitutionByStockRequest>(), "ka10059"),
        ];

        for ((api_id, path), expected) in routes {
            assert_eq!(api_id, expected);
            assert_eq!(path, "/api/dostk/stkinfo", "{}", expected);
        }
    }
}
