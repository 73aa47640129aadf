use config::Config;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Needs to implement Clone to be able to be passed into Router as State.
// The calculator endpoints are stateless, so there is nothing here beyond
// the runtime configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self { config: app_config }
    }
}
