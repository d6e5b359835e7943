use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use event_bus_client::EventBusClient;
use posts_api::{build_router, AppState, PostStore};
use posts_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("posts=info".parse()?)
                .add_directive("event_bus_client=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let publisher = EventBusClient::new(&config.event_bus_url, config.event_bus_timeout())?;
    let state = Arc::new(AppState::new(PostStore::new(), Arc::new(publisher)));

    let app = build_router(state, &config.allowed_origins)?;

    let addr = config.bind_addr();
    info!(event_bus = %config.event_bus_url, "Posts service starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
