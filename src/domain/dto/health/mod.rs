//! 헬스체크 응답 DTO
//!
//! 성공 응답 예시:
//!
//! ```json
//! {
//!   "status": "ok",
//!   "timestamp": "2025-01-01T00:00:00.000Z",
//!   "mongodb": { "ok": true, "message": "MongoDB is reachable", "latencyMs": 12 },
//!   "uptimeSeconds": 3600,
//!   "memory": { "rss": 31457280, "heapTotal": 52428800, "heapUsed": 20971520 }
//! }
//! ```
//!
//! 실패 응답에는 `uptimeSeconds` 와 `memory` 가 없습니다.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// 성공 시 `mongodb.message`
pub const MONGO_REACHABLE_MESSAGE: &str = "MongoDB is reachable";
/// 실패 사유가 비어 있을 때의 `mongodb.message`
pub const MONGO_PING_FAILED_MESSAGE: &str = "MongoDB ping failed";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Down,
}

/// 데이터베이스 생존 확인 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoStatus {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// 프로세스 메모리 스냅샷 (바이트)
///
/// 운영체제가 보고하지 못하는 항목은 생략됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heap_total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heap_used: Option<u64>,
}

/// `GET /health` 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub mongodb: MongoStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemorySnapshot>,
}

impl HealthResponse {
    /// 데이터베이스에 도달한 경우의 응답
    pub fn up(at: DateTime<Utc>, latency_ms: u64, uptime_seconds: u64, memory: MemorySnapshot) -> Self {
        Self {
            status: HealthStatus::Ok,
            timestamp: iso_timestamp(at),
            mongodb: MongoStatus {
                ok: true,
                message: MONGO_REACHABLE_MESSAGE.to_string(),
                latency_ms: Some(latency_ms),
            },
            uptime_seconds: Some(uptime_seconds),
            memory: Some(memory),
        }
    }

    /// ping 이 실패한 경우의 응답
    ///
    /// `reason` 이 비어 있으면 고정 문구로 대체합니다.
    pub fn down(at: DateTime<Utc>, reason: &str) -> Self {
        let message = if reason.trim().is_empty() {
            MONGO_PING_FAILED_MESSAGE.to_string()
        } else {
            reason.to_string()
        };

        Self {
            status: HealthStatus::Down,
            timestamp: iso_timestamp(at),
            mongodb: MongoStatus {
                ok: false,
                message,
                latency_ms: None,
            },
            uptime_seconds: None,
            memory: None,
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}

fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
