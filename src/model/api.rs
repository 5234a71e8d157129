use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the fixture server.
///
/// Mirrors the error payload of the real backend so front-end error handling can be
/// exercised against the mock unchanged.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}
