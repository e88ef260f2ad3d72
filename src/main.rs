use autosouk_backend::{api_routes, common_routes, cors_layer, AppConfig, AppState, Store};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("autosouk_backend=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = Store::connect(&config).await?;
    // Kept aside so the client can be shut down after the server drains.
    let client = store.client().clone();
    let state = AppState { store };

    let app = Router::new()
        .merge(common_routes())
        .nest("/api", api_routes(state))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    client.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    tracing::info!("shutdown signal received");
}
