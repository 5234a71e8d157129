use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Binds the listener socket for the fixture server.
///
/// # Arguments
/// - `config` - Application configuration containing the bind address
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to the configured address
/// - `Err(AppError::IoErr)` - Address unavailable or permission denied
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Fixture server listening on {}", listener.local_addr()?);

    Ok(listener)
}

/// Builds the CORS layer allowing the front-end dev server to read fixtures.
///
/// Only `GET` is allowed. Without a configured origin every origin is accepted.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the configured origin
/// - `Err(AppError::ConfigErr)` - Configured origin is not a valid header value
pub fn setup_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods([axum::http::Method::GET]);

    match &config.cors_origin {
        Some(origin) => {
            let value =
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                    name: "FIXTURE_CORS_ORIGIN".to_string(),
                    value: origin.clone(),
                })?;

            Ok(layer.allow_origin(value))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
