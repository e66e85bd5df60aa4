//! # Core Module
//!
//! 애플리케이션 상태 조립과 생명주기를 담당합니다.
//!
//! 데이터베이스 핸들은 모듈 수준 싱글톤이 아니라 [`state::AppState`] 에 담겨
//! 생성 시점에 주입됩니다. 부트스트랩 순서는 다음과 같습니다.
//!
//! 1. 설정 로드 및 MongoDB 클라이언트 생성 (acquire)
//! 2. 최초 ping (실패해도 기동은 계속)
//! 3. `AppState` 조립 후 HTTP 서버 시작
//! 4. 서버 종료 후 `AppState::shutdown()` (release)

pub mod state;

pub use state::AppState;
