//! 엔드포인트별 요청 타입.
//!
//! 각 타입은 벤더 필드 약어 그대로 직렬화되며, `api-id`와 경로를
//! 연관 상수로 가집니다. 열거형 파라미터는 `new()`에서 기본값을 채우고,
//! 필드가 공개되어 있으므로 필요하면 덮어쓸 수 있습니다.

pub mod account;
pub mod quote;
pub mod stock_info;

use serde::Serialize;

pub use account::*;
pub use quote::*;
pub use stock_info::*;

/// 키움 API 요청 본문.
pub trait KiwoomRequest: Serialize + Send + Sync {
    /// 요청 헤더 `api-id` 값 (예: "ka10001")
    const API_ID: &'static str;
    /// 요청 경로 (예: "/api/dostk/stkinfo")
    const PATH: &'static str;
}

/// 요청 타입에 `KiwoomRequest` 구현.
macro_rules! impl_kiwoom_request {
    ($($ty:ty => ($api_id:expr, $path:expr)),+ $(,)?) => {
        $(
            impl $crate::request::KiwoomRequest for $ty {
                const API_ID: &'static str = $api_id;
                const PATH: &'static str = $path;
            }
        )+
    };
}

pub(crate) use impl_kiwoom_request;

/// 시장구분 코드 (`mrkt_tp`).
pub mod market {
    /// 전체
    pub const ALL: &str = "000";
    /// 코스피
    pub const KOSPI: &str = "001";
    /// 코스닥
    pub const KOSDAQ: &str = "101";
}

/// 거래소구분 코드 (`stex_tp`).
pub mod exchange {
    /// KRX
    pub const KRX: &str = "1";
    /// NXT (대체거래소)
    pub const NXT: &str = "2";
    /// 통합
    pub const UNIFIED: &str = "3";
}

/// 오늘 날짜 (한국 시간, "YYYYMMDD").
pub fn today_kst() -> String {
    chrono::Utc::now()
        .with_timezone(&chrono_tz::Asia::Seoul)
        .format("%Y%m%d")
        .to_string()
}
