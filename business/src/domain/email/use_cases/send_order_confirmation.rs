use async_trait::async_trait;

use crate::domain::email::errors::EmailError;
use crate::domain::email::model::OrderResult;

pub struct SendOrderConfirmationParams {
    pub email: String,
    pub order: OrderResult,
}

#[async_trait]
pub trait SendOrderConfirmationUseCase: Send + Sync {
    async fn execute(&self, params: SendOrderConfirmationParams) -> Result<(), EmailError>;
}
