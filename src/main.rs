//! Riviera Booking server and client entry points.
//!
//! With `server`: serves the fullstack app plus `/status`.
//! Without it (the `web` build): launches the hydrating client.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::routing::get;
    use riviera_booking::{api, app::App, config, settings};
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riviera_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Riviera Booking v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");

    let addr = format!("{}:{}", config.host, config.port);
    if !settings::install(config.client) {
        tracing::warn!("Client settings were already installed");
    }
    tracing::info!("Booking backend: {}", settings::current().api_base_url);

    let app = dioxus::server::router(App)
        .route("/status", get(api::status_handler))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(riviera_booking::app::App);
}
