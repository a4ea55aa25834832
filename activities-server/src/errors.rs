use std::fmt::{Display, Formatter};

use activities_core::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String, String),
    NotFound(String),
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalServerError(message.into())
    }

    pub fn bad_request(message: impl Into<String>, meta: Option<String>) -> Self {
        Self::BadRequest(message.into(), meta.unwrap_or_default())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The client-facing message, without diagnostic metadata.
    pub fn into_message(self) -> String {
        match self {
            ApiError::InternalServerError(message)
            | ApiError::BadRequest(message, _)
            | ApiError::NotFound(message) => message,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InternalServerError(message) => write!(f, "Status=500, InternalServerError: {}", message),
            ApiError::BadRequest(message, meta) => write!(f, "Status=400, BadRequest: {}. {}", message, meta),
            ApiError::NotFound(message) => write!(f, "Status=404, NotFound: {}", message),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::ActivityNotFound(_) => ApiError::not_found("Activity not found"),
            RegistryError::NotRegistered { .. } => {
                ApiError::not_found("Student is not signed up for this activity")
            }
            RegistryError::AlreadyRegistered { email, activity } => ApiError::bad_request(
                "Student is already signed up",
                Some(format!("email: {}, activity: {}", email, activity)),
            ),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let api_error = match self {
            ServerError::ApiError(e) => e,
            ServerError::Registry(e) => ApiError::from(e),
            ServerError::Io(e) => {
                error!(%e, "I/O failure while handling request");
                ApiError::internal("Unexpected Error")
            }
        };

        let status = api_error.status_code();
        if status.is_server_error() {
            error!("{}", api_error);
        } else {
            warn!("{}", api_error);
        }

        (status, axum::Json(ErrorResponse { detail: api_error.into_message() })).into_response()
    }
}
