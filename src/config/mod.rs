//! # Configuration Module
//!
//! 카탈로그 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수(또는 `.env` 파일)에서 읽어오며,
//! 로직 안에 접속 정보를 하드코딩하지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, CORS 허용 목록
//! - [`mongo_config`] - MongoDB 클러스터 접속 정보
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, MongoConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let port = ServerConfig::port();
//! let mongo = MongoConfig::from_env();
//! println!("{:?} 환경, 포트 {}, DB {}", env, port, mongo.database_name);
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 외부 호스트 모드 (리스닝 생략)
//! export NODE_ENV="production"
//!
//! # MongoDB Atlas
//! export MONGO_USERNAME="catalog_reader"
//! export MONGO_PASSWORD="secret"
//! export CLUSTER_NAME="cluster0"
//! export APP_NAME="zeta-edge"
//! ```

pub mod data_config;
pub mod mongo_config;

pub use data_config::*;
pub use mongo_config::*;
