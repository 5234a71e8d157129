//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error for the fixture server. It wraps startup errors
//! (configuration, socket binding) and request errors (unknown records or fixtures), and
//! implements `IntoResponse` so handlers can return it directly.

pub mod config;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use test_utils::error::FixtureError;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure binding or serving the listener socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Fixture lookup or encoding error.
    ///
    /// Unknown fixture names result in 404 Not Found; encoding failures in
    /// 500 Internal Server Error.
    #[error(transparent)]
    FixtureErr(#[from] FixtureError),

    /// No fixture record exists with the requested identifier.
    ///
    /// Results in 404 Not Found with the same message the real backend produces.
    ///
    /// # Fields
    /// - `entity` - Backend entity name, e.g. `Articles`
    /// - `id` - Identifier as supplied by the client
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Query string is missing a parameter or a parameter does not parse.
    ///
    /// Results in 400 Bad Request with the rejection message.
    #[error(transparent)]
    BadQuery(#[from] QueryRejection),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadQuery`
/// - 404 Not Found - For `NotFound` and unknown fixture names
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            err @ Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    kind: "EntityNotFoundException".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response(),
            Self::BadQuery(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    kind: "BadRequest".to_string(),
                    message: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::FixtureErr(err @ FixtureError::UnknownFixture(_)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    kind: "UnknownFixture".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                kind: "InternalServerError".to_string(),
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
