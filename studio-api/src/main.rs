use std::net::SocketAddr;
use std::sync::Arc;

use studio_api::{app, AppState};
use studio_store::{seed_catalog, Config, StudioStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting studio API on port {}", config.server.port);

    let catalog = seed_catalog();
    let store = Arc::new(StudioStore::new(
        catalog,
        config.business_rules.admission_policy(),
    ));

    let app = app(AppState { store });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
