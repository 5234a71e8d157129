use thiserror::Error;

/// Errors raised when a fixture is addressed by name at runtime.
///
/// The typed accessors in `fixture` cannot fail; these errors only arise on the string
/// path used by the fixture server.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// No catalog entry is exported under the requested name.
    #[error("Unknown fixture '{0}'")]
    UnknownFixture(String),

    /// Fixture records could not be encoded as JSON.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
