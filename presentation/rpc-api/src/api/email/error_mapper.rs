use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::email::errors::EmailError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, RpcCode};

impl IntoErrorResponse for EmailError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            EmailError::InvalidMoney(_) => RpcCode::InvalidArgument.response(self.to_string()),
            EmailError::RenderFailed(_)
            | EmailError::InvalidAddress(_)
            | EmailError::DeliveryFailed(_) => {
                RpcCode::Internal.response(format!("Failed to send email: {}", self))
            }
        }
    }
}
