use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use sea_orm::DatabaseConnection;
use common::utils::logging::{init_logging as init_subscriber, LogFormat};
use configs::{AppConfig, Environment};
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::TokenIssuer;
use service::station::repo::SeaOrmStationRepository;
use service::user::repo::SeaOrmUserRepository;

use crate::routes::{self, auth::ServerState};

/// Initialize logging for the given environment: compact for local work, JSON elsewhere.
pub fn init_logging(env: Environment) {
    match env {
        Environment::Local => init_subscriber(LogFormat::Compact, "debug"),
        Environment::Dev => init_subscriber(LogFormat::Json, "debug"),
        Environment::Prod => init_subscriber(LogFormat::Json, "info"),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn token_issuer(cfg: &AppConfig) -> TokenIssuer {
    let hours = cfg.auth.token_ttl_hours.min(configs::MAX_TOKEN_TTL_HOURS) as i64;
    let ttl = chrono::Duration::hours(hours);
    TokenIssuer::new(&cfg.auth.jwt_secret, ttl)
}

/// Build the application router on top of a database connection.
pub fn build_app(cfg: &AppConfig, db: DatabaseConnection) -> Router {
    let state = ServerState::new(
        Arc::new(SeaOrmUserRepository::new(db.clone())),
        Arc::new(SeaOrmStationRepository::new(db)),
        token_issuer(cfg),
    );
    routes::build_router(state, build_cors(), Duration::from_secs(cfg.server.request_timeout_secs))
}

/// Public entry: connect, migrate, then serve until Ctrl+C or SIGTERM
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!("database migrations applied");

    let app = build_app(&cfg, db);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, env = ?cfg.env, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
