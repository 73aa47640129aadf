use log::{error, info};
use service::config::Config;
use service::logging::Logger;
use service::AppState;

#[tokio::main]
async fn main() {
    let config = Config::new();

    Logger::init_logger(&config);

    info!(
        "Starting calculator API server on {}:{} (runtime environment: {})",
        config.interface.as_deref().unwrap_or("127.0.0.1"),
        config.port,
        config.runtime_env()
    );

    let app_state = AppState::new(config);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server exited with error: {e:?}");
        std::process::exit(1);
    }
}
