use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lectern_core::{AuthError, NotificationError, SessionError, StoreError};
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Topic must not be empty")]
    EmptyTopic,
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error("Unknown internal error: {0}")]
    Unknown(String),
}

impl ServerError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::EmptyTopic => StatusCode::BAD_REQUEST,
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.as_status_code(), self.to_string()).into_response()
    }
}

impl From<AuthError> for ServerError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
        }
    }
}

impl From<SessionError> for ServerError {
    fn from(value: SessionError) -> Self {
        match value {
            SessionError::EmptyTopic => Self::EmptyTopic,
            SessionError::Store(e) => Self::Unknown(e.to_string()),
        }
    }
}

impl From<NotificationError> for ServerError {
    fn from(value: NotificationError) -> Self {
        match value {
            NotificationError::EmptyMessage => Self::EmptyMessage,
            NotificationError::Store(e) => Self::Unknown(e.to_string()),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Unknown(value.to_string())
    }
}
