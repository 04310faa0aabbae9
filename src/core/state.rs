// Application state (AppState)

use crate::api::client::UserServiceClient;
use crate::controllers::session::Session;
use crate::core::config::Config;
use crate::core::error::ClientError;
use std::sync::Arc;

/// Shared application state
///
/// The shell serves one local user, so a single session holds the view state.
pub struct AppState {
    pub session: Session<UserServiceClient>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = UserServiceClient::new(config.remote.base_url.clone())?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: Config, client: UserServiceClient) -> Self {
        Self {
            session: Session::new(Arc::new(client)),
            config: Arc::new(config),
        }
    }
}
