//! # Health Check HTTP Handler

use actix_web::{get, web, HttpResponse};

use crate::core::AppState;

/// 데이터베이스 생존 여부를 보고하는 헬스체크 엔드포인트
///
/// 호출마다 `admin` 데이터베이스에 ping 을 보냅니다.
///
/// # 응답
///
/// - `200 OK` - `status: "ok"`, `mongodb.latencyMs`, `uptimeSeconds`, `memory`
/// - `503 Service Unavailable` - `status: "down"`, `mongodb.ok: false`
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let report = state.health.check().await;

    if report.is_up() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
