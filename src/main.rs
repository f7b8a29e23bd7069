//! sPanel dashboard binary
//!
//! The server build renders the app, hydrates it and mounts the liveness API.
//! The web build only launches the client.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;

    use spanel_dashboard::{api, app::App, config};
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "spanel_dashboard=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");
    tracing::info!(app = %config.app_name, version = %config.version, "Starting dashboard");

    let port = config.port;
    let app = dioxus::server::router(App)
        .merge(api::router(api::AppState::new(config)))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(spanel_dashboard::app::App);
}
