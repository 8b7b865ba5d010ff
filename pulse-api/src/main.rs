mod app_state;
mod config;
mod domain;
mod router;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::from_filename("./pulse-api/.env.local").ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = config::read_config().expect("Failed to read configuration");
    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );

    let app = router::create(config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", address, e));
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await.expect("Server failed");
}
