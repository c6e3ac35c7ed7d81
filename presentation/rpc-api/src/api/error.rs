use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every RPC.
///
/// `name` carries the RPC status code, `message` the human-readable detail.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// RPC status codes surfaced by the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcCode {
    InvalidArgument,
    NotFound,
    Internal,
}

impl RpcCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcCode::InvalidArgument => "INVALID_ARGUMENT",
            RpcCode::NotFound => "NOT_FOUND",
            RpcCode::Internal => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RpcCode::InvalidArgument => StatusCode::BAD_REQUEST,
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response(&self, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
        (
            self.status(),
            Json(ErrorResponse {
                name: self.as_str().to_string(),
                message: message.into(),
            }),
        )
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
