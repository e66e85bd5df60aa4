//! 제타 엣지 카탈로그 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB 클라이언트를 준비한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 프로덕션(외부 호스트 마운트) 모드에서는 리스닝 소켓을 열지 않습니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use zeta_edge_catalog::config::{
    profile_env_files, CorsConfig, Environment, MongoConfig, ServerConfig,
};
use zeta_edge_catalog::core::AppState;
use zeta_edge_catalog::db::{Database, DocumentStore, UnavailableStore};
use zeta_edge_catalog::routes::configure_app;
use zeta_edge_catalog::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};
use zeta_edge_catalog::utils::process_stats;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    process_stats::mark_process_start();

    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Zeta Edge Catalog");
    info!("🚀 카탈로그 서비스 시작중... ({:?})", Environment::current());

    // 데이터 스토어 초기화
    let mongo_config = MongoConfig::from_env();
    let store = initialize_data_store(&mongo_config).await;

    let state = web::Data::new(AppState::new(store, &mongo_config.products_collection));

    let result = if ServerConfig::listen_enabled() {
        start_http_server(state.clone()).await
    } else {
        info!("🔕 리스닝 생략: 외부 호스트가 routes::configure_app 으로 앱을 마운트합니다");
        Ok(())
    };

    // 서버 종료 후 데이터베이스 자원 해제
    state.shutdown().await;
    info!("👋 카탈로그 서비스 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS 허용 목록, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
/// SIGINT/SIGTERM 을 받으면 진행 중인 요청을 마친 뒤 반환합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();
    let allowed_origins = CorsConfig::allowed_origins();

    print_step_start(2, "Starting HTTP server");
    for origin in &allowed_origins {
        print_sub_task("CORS origin", origin);
    }

    let app_config = configure_app(state, allowed_origins);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(app_config.clone())
    })
    .bind((host.as_str(), port))?;

    if let Some(workers) = ServerConfig::workers() {
        server = server.workers(workers);
    }

    print_step_complete(2, "HTTP server bound");
    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);
    info!("📍 Products: http://{}:{}/api/products", host, port);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=prod` - .env.prod 로드 후 .env 로 보충
/// * `PROFILE=dev` - .env.dev 로드 후 .env 로 보충
/// * 미설정 또는 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();

    for filename in profile_env_files(profile.as_deref()) {
        if let Err(e) = dotenv::from_filename(filename) {
            eprintln!("{} 파일 로드 실패: {}", filename, e);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB 클라이언트를 생성하고 최초 ping 을 보냅니다
///
/// 클라이언트를 만들 수 없으면 (자격 증명 누락, 잘못된 URI) 에러를 로그로 남기고
/// [`UnavailableStore`] 로 대체합니다. ping 실패도 로그만 남기며, 어느 경우든
/// 서버는 계속 기동됩니다. 재시도는 하지 않습니다.
async fn initialize_data_store(config: &MongoConfig) -> Arc<dyn DocumentStore> {
    print_step_start(1, "Connecting to MongoDB");
    print_sub_task("Target", &config.redacted_target());
    print_sub_task("Database", &config.database_name);
    print_sub_task("Collection", &config.products_collection);

    let database = match Database::connect(config).await {
        Ok(database) => database,
        Err(e) => {
            error!("❌ MongoDB 클라이언트 생성 실패: {}", e);
            warn!("⚠️ 데이터베이스 없이 기동합니다. DB 요청은 모두 실패합니다.");
            return Arc::new(UnavailableStore::new(e.reason()));
        }
    };

    match database.ping().await {
        Ok(()) => {
            info!("✅ Pinged your deployment. You successfully connected to MongoDB!");
            print_step_complete(1, "MongoDB reachable");
        }
        Err(e) => {
            error!("❌ MongoDB 최초 ping 실패: {}", e);
            warn!("⚠️ 연결 없이 기동합니다. 드라이버가 요청 시 재연결을 시도합니다.");
        }
    }

    Arc::new(database)
}
