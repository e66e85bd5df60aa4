//! CORS 허용 목록 미들웨어 구성
//!
//! 허용 목록에 있는 Origin 에만 교차 출처 응답 헤더를 붙입니다.
//! 목록에 없는 Origin 의 요청은 핸들러에 도달하기 전에 거절됩니다.

use actix_cors::Cors;
use actix_web::http::{header, Method, Uri};
use log::warn;

/// 허용 목록으로 CORS 미들웨어를 구성합니다.
///
/// 스킴과 호스트가 없는 항목은 경고를 남기고 무시합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&CorsConfig::allowed_origins());
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default();

    for origin in allowed_origins {
        if is_valid_origin(origin) {
            cors = cors.allowed_origin(origin);
        } else {
            warn!("잘못된 CORS Origin 을 무시합니다: {}", origin);
        }
    }

    cors
        // 허용되지 않은 Origin 은 핸들러 호출 없이 400 으로 거절
        .block_on_origin_mismatch(true)
        // 읽기 전용 API
        .allowed_methods(vec![Method::GET, Method::HEAD, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

fn is_valid_origin(origin: &str) -> bool {
    if origin == "*" {
        return false;
    }

    match origin.parse::<Uri>() {
        Ok(uri) => uri.scheme().is_some() && uri.host().is_some(),
        Err(_) => false,
    }
}
