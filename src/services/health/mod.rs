//! # 헬스체크 서비스
//!
//! 매 호출마다 `admin` 데이터베이스에 ping 을 보내고 왕복 시간을 측정합니다.
//! 결과를 캐시하지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::error;

use crate::db::DocumentStore;
use crate::domain::dto::health::HealthResponse;
use crate::utils::process_stats;

/// 데이터베이스 생존 확인 서비스
#[derive(Clone)]
pub struct HealthService {
    store: Arc<dyn DocumentStore>,
}

impl HealthService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// ping 을 수행하고 헬스체크 응답을 구성합니다.
    ///
    /// 성공 시 지연 시간(ms), 가동 시간, 메모리 스냅샷을 포함하고,
    /// 실패 시 드라이버의 오류 메시지를 그대로 담습니다.
    pub async fn check(&self) -> HealthResponse {
        let started = Instant::now();

        match self.store.ping().await {
            Ok(()) => {
                let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                HealthResponse::up(
                    Utc::now(),
                    latency_ms,
                    process_stats::uptime_seconds(),
                    process_stats::memory_snapshot(),
                )
            }
            Err(e) => {
                error!("헬스체크 실패 ({}): {}", self.store.name(), e);
                HealthResponse::down(Utc::now(), e.reason())
            }
        }
    }
}
