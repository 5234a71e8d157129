use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set to a value the server cannot use.
    ///
    /// Check the documentation or `.env.example` file for the expected format of each
    /// configuration variable.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
