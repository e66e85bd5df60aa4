//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`limit`] - `limit` 쿼리 파라미터 해석
//! - [`process_stats`] - 가동 시간, 메모리 스냅샷
//! - [`display_terminal`] - 시작 과정 터미널 출력

pub mod limit;
pub mod process_stats;
pub mod display_terminal;
