//! 사용자 관리 API 서버 메인 애플리케이션
//!
//! 설정을 로드하고 사용자 저장소를 선택한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_api_backend::config::{ApiConfig, CorsConfig, ServerConfig, StoreBackend, StoreConfig};
use user_api_backend::core::state::AppState;
use user_api_backend::db::Database;
use user_api_backend::repositories::users::{MemoryUserStore, MongoUserStore, UserStore};
use user_api_backend::routes::configure_all_routes;
use user_api_backend::services::users::{BcryptPasswordEncoder, UserService};
use user_api_backend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 API 서비스 시작중...");

    let store = initialize_user_store().await?;
    let encoder = BcryptPasswordEncoder::from_config();
    info!("🔐 bcrypt cost: {}", encoder.cost());

    let api = ApiConfig::from_env();
    info!("검증 실패 응답 상태 코드: {}", api.validation_failure_status);

    let state = AppState::new(UserService::new(store, Arc::new(encoder)), api);

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let workers = ServerConfig::workers();

    print_startup_summary(&bind_address, state.users.store_name(), workers);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let origins = CorsConfig::allowed_origins();
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(configure_cors(&origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다
    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            println!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=user_api_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 생성합니다
///
/// MongoDB 연결이나 인덱스 생성에 실패하면 서버를 시작하지 않습니다.
async fn initialize_user_store() -> std::io::Result<Arc<dyn UserStore>> {
    match StoreConfig::backend() {
        StoreBackend::Memory => {
            info!("📦 메모리 사용자 저장소 사용 (재시작 시 데이터 소실)");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new(&StoreConfig::mongodb_uri(), &StoreConfig::database_name())
                .await
                .map_err(|e| {
                    error!("데이터베이스 연결 실패: {}", e);
                    std::io::Error::other(e.to_string())
                })?;

            let store = MongoUserStore::new(&database);
            store.create_indexes().await.map_err(|e| {
                error!("사용자 인덱스 생성 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(store))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`로 변경할 수 있습니다.
fn configure_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600)
}
