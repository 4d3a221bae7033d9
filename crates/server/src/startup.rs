use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::catalog::repo::seaorm::SeaOrmProductRepository;
use service::catalog::CatalogService;

use crate::routes::{self, products::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Connect with pooled settings when a usable config exists, else fall back
/// to the plain DATABASE_URL connection.
async fn connect_db() -> anyhow::Result<sea_orm::DatabaseConnection> {
    match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            if cfg.database.validate().is_ok() {
                models::db::connect_with_config(&cfg.database).await
            } else {
                models::db::connect().await
            }
        }
        Err(_) => models::db::connect().await,
    }
}

/// Public entry: connect storage, apply migrations, build the app and serve
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let db = connect_db().await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmProductRepository::new(db));
    let state = ServerState { catalog: Arc::new(CatalogService::new(repo)) };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
