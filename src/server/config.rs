use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    /// Address the fixture server listens on.
    pub bind_address: SocketAddr,

    /// Origin allowed to call the server from a browser. `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied for unset variables
    /// - `Err(AppError::ConfigErr)` - A variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("FIXTURE_SERVER_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "FIXTURE_SERVER_ADDR".to_string(),
                value: bind_address.clone(),
            })?;

        let cors_origin = match lookup("FIXTURE_CORS_ORIGIN") {
            Some(origin) if origin.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "FIXTURE_CORS_ORIGIN".to_string(),
                    value: origin,
                }
                .into())
            }
            origin => origin,
        };

        Ok(Self {
            bind_address,
            cors_origin,
        })
    }
}
