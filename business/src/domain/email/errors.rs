/// Failures of the order-confirmation mail path.
/// Messages carry the underlying cause so callers can diagnose them.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EmailError {
    #[error("email.invalid_money: nanos {0} out of range")]
    InvalidMoney(i32),
    #[error("email.render_failed: {0}")]
    RenderFailed(String),
    #[error("email.invalid_address: {0}")]
    InvalidAddress(String),
    #[error("email.delivery_failed: {0}")]
    DeliveryFailed(String),
}
