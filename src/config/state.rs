// Application state: configuration plus the outbound echo client

use std::sync::Arc;

use crate::clients::echo_client::{EchoClient, ECHO_ENDPOINT};
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub echo: EchoClient,
}

impl AppState {
    /// Builds state around an externally supplied echo client.
    pub fn new(echo: EchoClient) -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::from_env()?;

        Ok(Self {
            environment: Arc::new(environment),
            echo,
        })
    }

    /// Production wiring: the echo client points at the public echo service.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(EchoClient::new(ECHO_ENDPOINT))
    }
}
