//! Builds a Platform client from configuration.

use std::sync::Arc;
use tracing::info;

use toyval_config::{ClientConfig, Transport};
use toyval_platform::LocalPlatform;
use toyval_traits::{PlatformClient, PlatformError};

use crate::http::HttpPlatformClient;

/// Returns the client selected by `config`: in-process when no endpoint is
/// set, HTTP otherwise.
pub fn platform_client(config: &ClientConfig) -> Result<Arc<dyn PlatformClient>, PlatformError> {
    match config.transport() {
        Transport::Local => {
            info!("Using in-process Platform");
            Ok(Arc::new(LocalPlatform::new()))
        }
        Transport::Http { endpoint } => {
            let api_key = config.api_key();
            info!(
                endpoint = %endpoint,
                authenticated = api_key.is_some(),
                timeout_ms = config.timeout_ms,
                "Using HTTP Platform"
            );
            Ok(Arc::new(HttpPlatformClient::new(endpoint, api_key, config.timeout())?))
        }
    }
}
