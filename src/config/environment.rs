// Environment configuration loaded from the process environment and .env

use std::borrow::Cow;

use anyhow::Result;
use dotenv::dotenv;
use tracing::warn;

// Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
}

impl EnvironmentVariables {
    /// Loads variables from the environment (and .env), falling back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config: Self = Self {
            environment: match dotenv::var("ENVIRONMENT") {
                Ok(env) => env.into(),
                Err(_) => {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    DEFAULT_ENVIRONMENT.into()
                }
            },
            host: match dotenv::var("HOST") {
                Ok(host) => host.into(),
                Err(_) => DEFAULT_HOST.into(),
            },
            port: match dotenv::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => DEFAULT_PORT,
            },
        };

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }
}
