use axum::Router;
use common::utils::logging::init_logging_default;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState, FRONTEND_DIR};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Validated config.toml, or environment variables when the file is missing
/// or invalid.
fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config.toml unavailable; using environment");
            AppConfig::from_env()
        }
    }
}

/// Public entry: connect, migrate, build the app and run the HTTP server.
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging_default();

    let cfg = load_config();
    common::env::ensure_frontend(FRONTEND_DIR).await;
    common::env::ensure_sqlite_dir(&cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;

    let app: Router = routes::build_router(ServerState::new(db), build_cors());

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "persons server listening");
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
