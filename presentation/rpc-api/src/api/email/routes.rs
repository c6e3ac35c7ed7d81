use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::email::model::OrderResult;
use business::domain::email::use_cases::send_order_confirmation::{
    SendOrderConfirmationParams, SendOrderConfirmationUseCase,
};

use crate::api::email::dto::{SendOrderConfirmationReply, SendOrderConfirmationRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

/// Service name used for health reporting.
pub const SERVICE_NAME: &str = "EmailService";

pub struct EmailApi {
    send_use_case: Arc<dyn SendOrderConfirmationUseCase>,
}

impl EmailApi {
    pub fn new(send_use_case: Arc<dyn SendOrderConfirmationUseCase>) -> Self {
        Self { send_use_case }
    }
}

/// Email API
///
/// Order confirmation emails.
#[OpenApi]
impl EmailApi {
    /// Send order confirmation
    ///
    /// Renders the order into an HTML email and hands it to the configured
    /// mail sender. Failures are returned as INTERNAL with the cause text.
    #[oai(
        path = "/EmailService/SendOrderConfirmation",
        method = "post",
        tag = "ApiTags::Email"
    )]
    async fn send_order_confirmation(
        &self,
        body: Json<SendOrderConfirmationRequest>,
    ) -> SendOrderConfirmationResponse {
        let request = body.0;
        let order = match OrderResult::try_from(request.order) {
            Ok(order) => order,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return SendOrderConfirmationResponse::BadRequest(json);
            }
        };

        let params = SendOrderConfirmationParams {
            email: request.email,
            order,
        };

        match self.send_use_case.execute(params).await {
            Ok(()) => SendOrderConfirmationResponse::Ok(Json(SendOrderConfirmationReply {})),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendOrderConfirmationResponse::BadRequest(json),
                    _ => SendOrderConfirmationResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendOrderConfirmationResponse {
    #[oai(status = 200)]
    Ok(Json<SendOrderConfirmationReply>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
