//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS 허용 목록을 환경 변수에서 읽어옵니다.

use std::env;

/// 기본 리스닝 포트
pub const DEFAULT_PORT: u16 = 5000;

/// 기본 CORS 허용 Origin 목록
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://zeta-edge-server.vercel.app",
];

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - 외부 호스트가 앱을 마운트하는 배포 형태
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 둘 다 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Production {
    ///     println!("외부 호스트 모드");
    /// }
    /// ```
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. `production` 만 `Production` 이 되며,
    /// 알 수 없는 값(`ci`, `local`, `prod` 등)은 `Development`를 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" => Environment::Production,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// `PROFILE` 값에 따라 로드할 `.env` 파일 목록을 앞에서부터 반환합니다.
///
/// * `prod` - `.env.prod` 다음 `.env`
/// * `dev` - `.env.dev` 다음 `.env`
/// * 미설정 또는 기타 - `.env`
///
/// `dotenv` 는 이미 설정된 변수를 덮어쓰지 않으므로 앞 파일의 값이 우선합니다.
pub fn profile_env_files(profile: Option<&str>) -> Vec<&'static str> {
    match profile.map(str::trim) {
        Some("prod") => vec![".env.prod", ".env"],
        Some("dev") => vec![".env.dev", ".env"],
        _ => vec![".env"],
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 5000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// `PORT` 값을 해석합니다. 비어 있거나 숫자가 아니면 기본값을 사용합니다.
    pub fn parse_port(raw: Option<&str>) -> u16 {
        raw.and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 설정되지 않으면 actix 기본값(물리 코어 수)을 따릅니다.
    pub fn workers() -> Option<usize> {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .filter(|&count: &usize| count > 0)
    }

    /// 리스닝 소켓을 열지 여부를 반환합니다.
    ///
    /// `LISTEN` 이 명시되면 그 값을 따르고, 아니면 프로덕션 환경에서만
    /// 바인딩을 생략합니다. 이 경우 외부 호스트가
    /// [`configure_app`](crate::routes::configure_app) 으로 앱을 마운트합니다.
    pub fn listen_enabled() -> bool {
        Self::resolve_listen(env::var("LISTEN").ok().as_deref(), &Environment::current())
    }

    /// `LISTEN` 값과 실행 환경으로 바인딩 여부를 결정합니다.
    pub fn resolve_listen(flag: Option<&str>, environment: &Environment) -> bool {
        match flag.map(|value| value.trim().to_lowercase()) {
            Some(value) if matches!(value.as_str(), "1" | "true" | "yes" | "on") => true,
            Some(value) if matches!(value.as_str(), "0" | "false" | "no" | "off") => false,
            _ => *environment != Environment::Production,
        }
    }
}

/// CORS 허용 목록 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 교차 출처 요청을 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분한 Origin 목록
    ///
    /// ```bash
    /// export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://zeta-edge-server.vercel.app"
    /// ```
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    /// 쉼표 구분 문자열을 Origin 목록으로 변환합니다.
    ///
    /// 값이 없거나 유효한 항목이 하나도 없으면 기본 목록을 사용합니다.
    pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            origins
        }
    }
}
