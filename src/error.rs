use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Storage,
    Provider,
    Unexpected,
    InvalidState,
    Validation,
    NotFound,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self.code {
            1 => ErrorKind::Config,
            2 => ErrorKind::Storage,
            3 | 4 => ErrorKind::Provider,
            100 => ErrorKind::InvalidState,
            101 => ErrorKind::Validation,
            102 => ErrorKind::NotFound,
            _ => ErrorKind::Unexpected,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.kind() {
            ErrorKind::Validation => (StatusCode::INTERNAL_SERVER_ERROR, self.message.as_str()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, self.message.as_str()),
            ErrorKind::InvalidState => (StatusCode::BAD_REQUEST, self.message.as_str()),
            _ => {
                tracing::error!(code = self.code, error = %self.message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 102,
        message: "invalid token".into(),
    }
}

pub fn config_error(message: impl Into<String>) -> Error {
    Error {
        code: 1,
        message: message.into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    config_error(format!("environment variable error: {}", err))
}

pub fn database_error<T: Debug>(err: T) -> Error {
    Error {
        code: 2,
        message: format!("database error: {:?}", err),
    }
}

pub fn storage_error(message: impl Into<String>) -> Error {
    Error {
        code: 2,
        message: message.into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    // the request url carries the api key
    Error {
        code: 3,
        message: format!("provider request failed: {}", err.without_url()),
    }
}

pub fn upstream_error(message: impl Into<String>) -> Error {
    Error {
        code: 4,
        message: message.into(),
    }
}

pub fn unexpected_error<T: Debug>(err: T) -> Error {
    Error {
        code: 5,
        message: format!("unexpected error: {:?}", err),
    }
}

#[test]
fn error_kinds_follow_codes() {
    assert_eq!(invalid_input_error("bad").kind(), ErrorKind::Validation);
    assert_eq!(not_found_error().kind(), ErrorKind::NotFound);
    assert_eq!(storage_error("full").kind(), ErrorKind::Storage);
    assert_eq!(upstream_error("no routes").kind(), ErrorKind::Provider);
    assert_eq!(invalid_state_error().kind(), ErrorKind::InvalidState);
    assert_eq!(config_error("missing").kind(), ErrorKind::Config);
    assert_eq!(unexpected_error("boom").kind(), ErrorKind::Unexpected);
}

#[test]
fn validation_errors_are_reported_with_their_message() {
    let response = invalid_input_error("not enough values to calculate paths").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = not_found_error().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
