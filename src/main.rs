//! SSR host for the campus console.
//!
//! Renders the Leptos app, serves the hydrate bundle under `/pkg`, and
//! answers `/healthz`. The REST backends the client talks to live elsewhere.

#![recursion_limit = "256"]

mod routes;

use leptos::config::get_configuration;

/// Startup failures for the host binary.
#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let conf = get_configuration(None).map_err(|e| HostError::Config(e.to_string()))?;
    let options = conf.leptos_options;

    let port = match std::env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|_| HostError::InvalidPort(raw))?,
        Err(_) => options.site_addr.port(),
    };

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "campus listening");
    axum::serve(listener, app).await?;
    Ok(())
}
