//! 주식 시세 API 서버.
//!
//! 설정을 로드하고 키움 클라이언트를 만든 뒤 Axum 서버를 시작합니다.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{http::StatusCode, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use astocks_api::routes::create_app;
use astocks_api::services::StockService;
use astocks_api::state::AppState;
use astocks_core::config::{AppConfig, KiwoomSettings};
use astocks_core::logging::{init_logging, LogConfig};
use astocks_kiwoom::{KiwoomClient, KiwoomConfig, KiwoomEnvironment};

/// 키움 설정 생성.
///
/// 인증 정보가 없어도 서버는 시작하며, 시세 요청은 인증 에러로 실패합니다.
fn kiwoom_config(settings: &KiwoomSettings) -> KiwoomConfig {
    if let Some(config) = KiwoomConfig::from_settings(settings) {
        info!(config = ?config, "Kiwoom client configured");
        return config;
    }

    warn!("KIWOOM_APP_KEY / KIWOOM_SECRET_KEY not set, quote requests will fail");
    let environment = KiwoomEnvironment::parse(&settings.environment).unwrap_or_default();
    let config = KiwoomConfig::new(String::new(), String::new(), environment)
        .with_timeout_secs(settings.timeout_secs);
    match &settings.base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    }
}

/// CORS 레이어 생성.
///
/// - `CORS_ORIGINS`: 쉼표로 구분된 허용 origin 목록.
///   설정되지 않으면 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!(count = origins.len(), "CORS configured with allowed origins");
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// 미들웨어가 적용된 전체 라우터 생성.
fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    create_app(state)
        .layer(TraceLayer::new_for_http())
        // 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors_layer())
}

/// `--export-openapi` 플래그가 있으면 OpenAPI 스펙을 stdout으로 출력.
fn export_openapi_requested() -> anyhow::Result<bool> {
    use astocks_api::openapi::ApiDoc;
    use utoipa::OpenApi as _;

    if !std::env::args().any(|arg| arg == "--export-openapi") {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
    println!("{}", json);
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if export_openapi_requested()? {
        return Ok(());
    }

    let config = AppConfig::load_default().context("failed to load configuration")?;

    init_logging(LogConfig::from_settings(&config.logging))
        .context("failed to initialize logging")?;

    info!("Starting A-Stocks API server...");

    let addr = config.server.socket_addr().map_err(|e| {
        error!(
            host = %config.server.host,
            port = config.server.port,
            error = %e,
            "Invalid server address, check ASTOCKS__SERVER__HOST / ASTOCKS__SERVER__PORT"
        );
        e
    })?;

    let client = Arc::new(
        KiwoomClient::from_config(kiwoom_config(&config.kiwoom))
            .context("failed to create Kiwoom client")?,
    );

    let stock_service = Arc::new(StockService::new(client.clone()));
    let state = Arc::new(AppState::new(stock_service));
    info!(version = %state.version, "Application state initialized");

    let app = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown initiated, revoking access token...");

    if let Err(e) = client.revoke().await {
        warn!(error = %e, "Failed to revoke Kiwoom access token");
    }

    info!("Server stopped gracefully");

    Ok(())
}

/// Ctrl+C 또는 SIGTERM 대기.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
