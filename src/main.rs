//! Dulce Horno Server — Bakery Management Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use bakery_api::state::AppState;
use bakery_core::config::AppConfig;
use bakery_core::error::AppError;
use bakery_database::DatabasePool;
use bakery_database::repositories::notification::NotificationRepository;
use bakery_database::repositories::user::UserRepository;
use bakery_push::{ExpoPushClient, PushDispatcher};
use bakery_service::notification::approval::ApprovalService;
use bakery_service::notification::composer::RequestComposer;
use bakery_service::notification::resolver::DirectoryAddressResolver;
use bakery_service::notification::service::NotificationService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BAKERY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Dulce Horno v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let database = DatabasePool::connect(&config.database).await?;
    let db_pool = database.pool().clone();

    tracing::info!("Running database migrations...");
    bakery_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Repositories ─────────────────────────────────────
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

    // ── Step 3: Push pipeline ────────────────────────────────────
    tracing::info!("Initializing push pipeline...");
    let provider = Arc::new(ExpoPushClient::new(&config.push)?);
    let resolver = Arc::new(DirectoryAddressResolver::new(Arc::clone(&user_repo)));
    let dispatcher = Arc::new(PushDispatcher::new(provider, resolver));
    tracing::info!("Push pipeline initialized");

    // ── Step 4: Auth ─────────────────────────────────────────────
    let jwt_decoder = Arc::new(bakery_api::jwt::JwtDecoder::new(&config.auth));

    // ── Step 5: Services ─────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let approval_service = Arc::new(ApprovalService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&dispatcher),
    ));
    let request_composer = Arc::new(RequestComposer::new(Arc::clone(&notification_repo)));
    tracing::info!("Services initialized");

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        jwt_decoder,
        notification_repo,
        user_repo,
        dispatcher,
        notification_service,
        approval_service,
        request_composer,
    };

    let app = bakery_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Dulce Horno server listening on {addr}");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let (drain_tx, mut drain_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections...");
        let _ = drain_tx.send(true);
    });

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = drain_rx.changed().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.server.shutdown_grace_seconds,
                "Shutdown grace period elapsed, closing remaining connections"
            );
        }
    }

    database.close().await;
    tracing::info!("Dulce Horno server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
