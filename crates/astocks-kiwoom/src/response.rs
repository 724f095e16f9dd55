//! 키움 응답 본문과 연속조회 정보.

use reqwest::header::HeaderMap;
use serde_json::Value;

/// 연속조회 헤더 이름.
pub const CONT_YN_HEADER: &str = "cont-yn";
/// 연속조회 키 헤더 이름.
pub const NEXT_KEY_HEADER: &str = "next-key";

/// 연속조회 상태.
///
/// 요청 시에는 `cont-yn`/`next-key` 요청 헤더로, 응답 시에는 같은 이름의
/// 응답 헤더에서 읽습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Continuation {
    /// 다음 페이지 존재 여부 (`cont-yn: Y`)
    pub has_next: bool,
    /// 다음 페이지 조회 키
    pub next_key: String,
}

impl Continuation {
    /// 첫 페이지 조회 (`cont-yn: N`, `next-key: ""`).
    pub fn none() -> Self {
        Self::default()
    }

    /// 이전 응답의 키로 다음 페이지를 조회.
    pub fn next(next_key: impl Into<String>) -> Self {
        Self {
            has_next: true,
            next_key: next_key.into(),
        }
    }

    /// `cont-yn` 헤더 값.
    pub fn cont_yn(&self) -> &'static str {
        if self.has_next {
            "Y"
        } else {
            "N"
        }
    }

    /// 응답 헤더에서 연속조회 정보 추출.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            has_next: header(CONT_YN_HEADER).eq_ignore_ascii_case("y"),
            next_key: header(NEXT_KEY_HEADER),
        }
    }
}

/// 디스패처 응답.
#[derive(Debug, Clone)]
pub struct KiwoomResponse {
    /// 벤더 응답 본문 (가공하지 않음)
    pub body: Value,
    /// 다음 페이지 정보
    pub continuation: Continuation,
}

impl KiwoomResponse {
    /// 다음 페이지가 있으면 그 조회 정보를 반환.
    pub fn next_page(&self) -> Option<Continuation> {
        self.continuation
            .has_next
            .then(|| Continuation::next(self.continuation.next_key.clone()))
    }

    /// 본문의 목록 필드 (예: `cntr_infr`) 반환.
    pub fn list(&self, key: &str) -> &[Value] {
        self.body
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// 본문의 `return_code` 추출.
///
/// 숫자와 숫자 문자열을 모두 허용합니다. 없거나 해석할 수 없으면 `None`.
pub fn return_code(body: &Value) -> Option<i64> {
    match body.get("return_code")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 본문의 `return_msg` 추출.
pub fn return_msg(body: &Value) -> Option<&str> {
    body.get("return_msg").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_return_code_variants() {
        assert_eq!(return_code(&json!({"return_code": 0})), Some(0));
        assert_eq!(return_code(&json!({"return_code": "2"})), Some(2));
        assert_eq!(return_code(&json!({"return_code": null})), None);
        assert_eq!(return_code(&json!({})), None);
        assert_eq!(return_msg(&json!({"return_msg": "ok"})), Some("ok"));
    }

    #[test]
    fn test_continuation_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONT_YN_HEADER, HeaderValue::from_static("Y"));
        headers.insert(NEXT_KEY_HEADER, HeaderValue::from_static("20241107-0042"));

        let cont = Continuation::from_headers(&headers);
        assert!(cont.has_next);
        assert_eq!(cont.next_key, "20241107-0042");
        assert_eq!(cont.cont_yn(), "Y");

        assert_eq!(Continuation::from_headers(&HeaderMap::new()), Continuation::none());
        assert_eq!(Continuation::none().cont_yn(), "N");
    }

    #[test]
    fn test_response_list_and_next_page() {
        let response = KiwoomResponse {
            body: json!({"cntr_infr": [{"tm": "130429"}, {"tm": "130428"}], "return_code": 0}),
            continuation: Continuation::next("k1"),
        };

        assert_eq!(response.list("cntr_infr").len(), 2);
        assert!(response.list("missing").is_empty());
        assert_eq!(response.next_page(), Some(Continuation::next("k1")));

        let last = KiwoomResponse {
            body: json!({}),
            continuation: Continuation::none(),
        };
        assert!(last.next_page().is_none());
    }
}
