use async_trait::async_trait;
use liqpay::{CheckoutParams, LiqPay};
use tracing::debug;

use crate::services::payment::{PaymentAdapter, PaymentError};

pub struct LiqPayAdapter {
    client: LiqPay,
}

impl LiqPayAdapter {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            client: LiqPay::new(public_key, private_key),
        }
    }
}

#[async_trait]
impl PaymentAdapter for LiqPayAdapter {
    async fn create_link(&self, params: &CheckoutParams) -> Result<String, PaymentError> {
        debug!(
            public_key = self.client.public_key(),
            order_id = %params.order_id,
            "Signing LiqPay checkout link"
        );
        Ok(self.client.cnb_link(params)?)
    }

    fn name(&self) -> &str {
        "liqpay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn link_carries_signed_params() {
        let adapter = LiqPayAdapter::new("sandbox_i000", "sandbox_secret");
        let params = CheckoutParams::pay(150, "UAH", "test", "order_rank_master_42");

        let link = adapter.create_link(&params).await.unwrap();
        assert!(link.starts_with(liqpay::CHECKOUT_URL));
        assert!(link.contains("&signature="));
    }

    #[tokio::test]
    async fn missing_key_surfaces_as_payment_error() {
        let adapter = LiqPayAdapter::new("", "");
        let params = CheckoutParams::pay(150, "UAH", "test", "order_1");

        let err = adapter.create_link(&params).await.unwrap_err();
        assert!(matches!(err, PaymentError::LiqPay(_)));
    }
}
