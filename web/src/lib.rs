use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use log::{info, warn};
use service::config::ApiVersion;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod params;
mod router;

/// Binds the configured listen address and serves the API router until the
/// server is shut down.
pub async fn init_server(app_state: AppState) -> Result<()> {
    let config = app_state.config.clone();

    let listen_address = format!(
        "{}:{}",
        config.interface.as_deref().unwrap_or("127.0.0.1"),
        config.port
    );

    let router = router::define_routes(app_state).layer(cors_layer(&config.allowed_origins));

    let listener = tokio::net::TcpListener::bind(&listen_address).await?;
    info!("Server starting... listening for connections on http://{listen_address}");

    axum::serve(listener, router).await?;

    Ok(())
}

// Restricts cross-origin requests to the origins named in the config.
// Origins that fail header-value parsing are skipped with a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping invalid allowed origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(ApiVersion::field_name()),
        ])
        .allow_origin(AllowOrigin::list(origins))
}
