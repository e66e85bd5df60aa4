//! 프로세스 가동 시간 및 메모리 통계
//!
//! 헬스체크 응답의 `uptimeSeconds` 와 `memory` 값을 제공합니다.
//! 메모리 값은 Linux `/proc/self/status` 에서 읽으며, 다른 플랫폼에서는
//! 비어 있는 스냅샷을 반환합니다.

use std::time::Instant;

use log::debug;
use once_cell::sync::Lazy;

use crate::domain::dto::health::MemorySnapshot;
use crate::errors::{AppResult, ErrorContext};

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// 가동 시간 기준 시각을 고정합니다. 부트스트랩 초기에 한 번 호출합니다.
pub fn mark_process_start() {
    Lazy::force(&PROCESS_START);
}

/// 프로세스 시작 이후 경과한 초 (내림)
pub fn uptime_seconds() -> u64 {
    PROCESS_START.elapsed().as_secs()
}

/// 현재 프로세스의 메모리 스냅샷
///
/// - `rss`: 상주 메모리 (`VmRSS`)
/// - `heapTotal`: 데이터 세그먼트 크기 (`VmData`)
/// - `heapUsed`: 상주 익명 메모리 (`RssAnon`)
pub fn memory_snapshot() -> MemorySnapshot {
    match read_proc_status() {
        Ok(status) => parse_proc_status(&status),
        Err(e) => {
            debug!("메모리 통계를 읽지 못했습니다: {}", e);
            MemorySnapshot::default()
        }
    }
}

fn read_proc_status() -> AppResult<String> {
    std::fs::read_to_string("/proc/self/status").context("failed to read /proc/self/status")
}

/// `/proc/self/status` 형식의 텍스트에서 메모리 항목을 바이트 단위로 추출합니다.
pub fn parse_proc_status(status: &str) -> MemorySnapshot {
    let mut snapshot = MemorySnapshot::default();

    for line in status.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let slot = match key.trim() {
            "VmRSS" => &mut snapshot.rss,
            "VmData" => &mut snapshot.heap_total,
            "RssAnon" => &mut snapshot.heap_used,
            _ => continue,
        };
        *slot = parse_kib(value);
    }

    snapshot
}

fn parse_kib(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some("kB") | None => amount.checked_mul(1024),
        Some(_) => None,
    }
}
