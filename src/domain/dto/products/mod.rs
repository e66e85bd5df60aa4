//! 상품 목록 조회 요청 DTO

use serde::Deserialize;

use crate::utils::limit::parse_limit;

/// `GET /api/products` 쿼리 파라미터
///
/// `limit` 은 문자열 그대로 받아 [`parse_limit`] 규칙으로 해석합니다.
/// 숫자가 아니어도 400 으로 거절하지 않고 "제한 없음"으로 취급합니다.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub limit: Option<String>,
}

impl ProductListQuery {
    /// 적용할 결과 개수 상한. `None` 이면 전체 컬렉션을 반환합니다.
    pub fn effective_limit(&self) -> Option<u64> {
        self.limit.as_deref().and_then(parse_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> ProductListQuery {
        actix_web::web::Query::<ProductListQuery>::from_query(raw)
            .unwrap()
            .into_inner()
    }

    #[test]
    fn test_effective_limit_from_query_string() {
        assert_eq!(query("limit=3").effective_limit(), Some(3));
        assert_eq!(query("limit=0").effective_limit(), None);
        assert_eq!(query("limit=abc").effective_limit(), None);
        assert_eq!(query("").effective_limit(), None);
        assert_eq!(query("other=1").effective_limit(), None);
    }
}
