use async_trait::async_trait;
use liqpay::{CheckoutParams, LiqPayError};
use thiserror::Error;

pub mod liqpay_adapter;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error(transparent)]
    LiqPay(#[from] LiqPayError),
}

#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Turn a parameter record into a hosted checkout URL
    async fn create_link(&self, params: &CheckoutParams) -> Result<String, PaymentError>;

    /// Get the adapter name
    fn name(&self) -> &str;
}
