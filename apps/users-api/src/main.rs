//! Users API - REST server

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserStore, UserStore};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The in-memory store stands in for an external database; connect()
    // models the resource acquisition step.
    let store = InMemoryUserStore::new();
    store.connect().await?;
    info!("Connected to in-memory user store");

    let api_routes = api::routes(&store);
    let app = create_router::<openapi::ApiDoc>(api_routes);

    info!("Starting Users API on port {}", config.server.port);

    create_app(app, &config.server).await?;

    info!("Users API shutdown complete");
    Ok(())
}
