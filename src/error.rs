use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    EnvVar,
    Config,
    Io,
    Server,
    InvalidInput,
    InvalidAmount,
    InvalidTimestamp,
}

impl ErrorKind {
    /// Codes below 100 are internal failures, the rest are caused by the caller.
    pub fn code(self) -> i32 {
        match self {
            Self::EnvVar => 1,
            Self::Config => 2,
            Self::Io => 3,
            Self::Server => 4,
            Self::InvalidInput => 101,
            Self::InvalidAmount => 102,
            Self::InvalidTimestamp => 103,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(err: JsonRejection) -> Self {
        invalid_input_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code() {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code(),
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error<T: Display>(err: T) -> Error {
    Error {
        kind: ErrorKind::InvalidInput,
        message: format!("invalid input: {}", err),
    }
}

pub fn invalid_amount_error(message: impl Into<String>) -> Error {
    Error {
        kind: ErrorKind::InvalidAmount,
        message: message.into(),
    }
}

pub fn invalid_timestamp_error(input: &str) -> Error {
    Error {
        kind: ErrorKind::InvalidTimestamp,
        message: format!("invalid timestamp: {:?}", input),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        kind: ErrorKind::EnvVar,
        message: format!("environment variable error: {}", err),
    }
}

pub fn config_error(message: impl Into<String>) -> Error {
    Error {
        kind: ErrorKind::Config,
        message: message.into(),
    }
}

pub fn io_error(err: io::Error) -> Error {
    Error {
        kind: ErrorKind::Io,
        message: format!("io error: {}", err),
    }
}

pub fn server_error<T: Debug>(err: T) -> Error {
    tracing::error!("server error: {:?}", err);

    Error {
        kind: ErrorKind::Server,
        message: "server error".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_map_to_bad_request() {
        let response = invalid_amount_error("only numbers are allowed").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = invalid_timestamp_error("yesterday").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = invalid_input_error("missing field `distance`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = config_error("bad listen address").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: Error = env::VarError::NotPresent.into();
        assert_eq!(err.kind, ErrorKind::EnvVar);
        assert_eq!(err.code(), 1);
    }
}
