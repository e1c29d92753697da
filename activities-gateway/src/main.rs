//! Entry point for the `activities-gateway` HTTP server.

use std::sync::Arc;

use activities_core::Registry;
use activities_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();

    let registry = match Registry::seeded() {
        Ok(r) => Arc::new(r),
        Err(e) => {
            tracing::error!(error = %e, "invalid activity catalog");
            std::process::exit(1);
        }
    };
    info!(activities = registry.len(), "activity registry seeded");

    let app = create_router(registry, &config);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        "activities-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
