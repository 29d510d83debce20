use crate::config::Config;

/// Shared application state.
///
/// The config and client are read-only after startup; each request runs its
/// own pipeline over them with no cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // No request timeout: a hung upstream blocks only its own request.
        Ok(Self {
            config,
            http_client: reqwest::Client::builder().build()?,
        })
    }
}
