use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::email::errors::EmailError;
use crate::domain::email::model::EmailEnvelope;
use crate::domain::email::services::{MailRenderer, MailSender};
use crate::domain::email::use_cases::send_order_confirmation::{
    SendOrderConfirmationParams, SendOrderConfirmationUseCase,
};
use crate::domain::logger::Logger;

pub struct SendOrderConfirmationUseCaseImpl {
    pub renderer: Arc<dyn MailRenderer>,
    pub sender: Arc<dyn MailSender>,
    pub from_address: String,
    pub logger: Arc<dyn Logger>,
}

impl SendOrderConfirmationUseCaseImpl {
    async fn render_and_send(&self, params: &SendOrderConfirmationParams) -> Result<(), EmailError> {
        let html = self.renderer.render(&params.order)?;
        let envelope = EmailEnvelope::order_confirmation(
            &self.from_address,
            &params.email,
            &params.order.order_id,
            html,
        );
        self.sender.send(&envelope).await
    }
}

#[async_trait]
impl SendOrderConfirmationUseCase for SendOrderConfirmationUseCaseImpl {
    async fn execute(&self, params: SendOrderConfirmationParams) -> Result<(), EmailError> {
        self.logger.info(&format!(
            "Sending order confirmation email to {}",
            params.email
        ));

        match self.render_and_send(&params).await {
            Ok(()) => {
                self.logger.info(&format!(
                    "Order confirmation email sent successfully to {}",
                    params.email
                ));
                Ok(())
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Failed to send order confirmation email for order {}: {}",
                    params.order.order_id, err
                ));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::model::{Address, CartItem, Money, OrderItem, OrderResult};
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        pub Renderer {}

        impl MailRenderer for Renderer {
            fn render(&self, order: &OrderResult) -> Result<String, EmailError>;
        }
    }

    mock! {
        pub Sender {}

        #[async_trait]
        impl MailSender for Sender {
            async fn send(&self, envelope: &EmailEnvelope) -> Result<(), EmailError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn permissive_logger() -> MockLog {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
    }

    fn sample_order() -> OrderResult {
        OrderResult {
            order_id: "ORD-7".to_string(),
            shipping_tracking_id: "TRK-1".to_string(),
            shipping_cost: Money::new(8, 990_000_000).unwrap(),
            shipping_address: Address {
                street_address: "1600 Amphitheatre Parkway".to_string(),
                city: "Mountain View".to_string(),
                state: "CA".to_string(),
                zip_code: "94043".to_string(),
                country: "USA".to_string(),
            },
            items: vec![OrderItem {
                item: CartItem {
                    product_id: "OLJCESPC7Z".to_string(),
                    quantity: 2,
                },
                cost: Money::new(19, 990_000_000).unwrap(),
            }],
        }
    }

    fn params() -> SendOrderConfirmationParams {
        SendOrderConfirmationParams {
            email: "buyer@example.com".to_string(),
            order: sample_order(),
        }
    }

    #[tokio::test]
    async fn should_render_and_send_confirmation() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .with(always())
            .times(1)
            .returning(|_| Ok("<html>order</html>".to_string()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .withf(|envelope| {
                envelope.to == "buyer@example.com"
                    && envelope.from == "noreply@shop.test"
                    && envelope.subject == "Order Confirmation - ORD-7"
                    && envelope.html_body == "<html>order</html>"
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut logger = permissive_logger();
        logger.expect_error().never();

        let use_case = SendOrderConfirmationUseCaseImpl {
            renderer: Arc::new(renderer),
            sender: Arc::new(sender),
            from_address: "noreply@shop.test".to_string(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_delivery_error_and_log_cause() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .returning(|_| Ok("<html>order</html>".to_string()));

        let mut sender = MockSender::new();
        sender
            .expect_send()
            .returning(|_| Err(EmailError::DeliveryFailed("connection refused".to_string())));

        let mut logger = permissive_logger();
        logger
            .expect_error()
            .withf(|message| message.contains("connection refused"))
            .times(1)
            .returning(|_| ());

        let use_case = SendOrderConfirmationUseCaseImpl {
            renderer: Arc::new(renderer),
            sender: Arc::new(sender),
            from_address: "noreply@shop.test".to_string(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;

        assert_eq!(
            result.unwrap_err(),
            EmailError::DeliveryFailed("connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn should_not_send_when_rendering_fails() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .returning(|_| Err(EmailError::RenderFailed("missing variable".to_string())));

        let mut sender = MockSender::new();
        sender.expect_send().never();

        let mut logger = permissive_logger();
        logger.expect_error().times(1).returning(|_| ());

        let use_case = SendOrderConfirmationUseCaseImpl {
            renderer: Arc::new(renderer),
            sender: Arc::new(sender),
            from_address: "noreply@shop.test".to_string(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), EmailError::RenderFailed(_)));
    }
}
