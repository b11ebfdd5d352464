use liqpay::CheckoutParams;
use std::sync::Arc;
use tracing::info;

use crate::catalog::{self, CURRENCY};
use crate::services::payment::{PaymentAdapter, PaymentError};

pub const RESULT_PATH: &str = "/payment-success";
pub const CALLBACK_PATH: &str = "/payment-callback";

/// Not unique: the same user confirming the same rank twice gets the same id.
pub fn order_id(rank_key: &str, user_id: u64) -> String {
    format!("order_{}_{}", rank_key, user_id)
}

#[derive(Clone)]
pub struct PayService {
    adapter: Arc<dyn PaymentAdapter>,
    public_url: String,
}

impl PayService {
    pub fn new(adapter: Arc<dyn PaymentAdapter>, public_url: impl Into<String>) -> Self {
        Self {
            adapter,
            public_url: public_url.into(),
        }
    }

    pub fn checkout_params(&self, rank_key: &str, user_id: u64) -> CheckoutParams {
        let (name, price) = catalog::name_and_price(rank_key);

        CheckoutParams::pay(
            price,
            CURRENCY,
            format!("Оплата за буст {}", name),
            order_id(rank_key, user_id),
        )
        .with_result_url(format!("{}{}", self.public_url, RESULT_PATH))
        .with_server_url(format!("{}{}", self.public_url, CALLBACK_PATH))
    }

    /// Unknown rank keys are not rejected; they produce a zero-amount link.
    pub async fn checkout_link(&self, rank_key: &str, user_id: u64) -> Result<String, PaymentError> {
        let params = self.checkout_params(rank_key, user_id);
        info!(
            order_id = %params.order_id,
            amount = %params.amount,
            adapter = self.adapter.name(),
            "Creating payment link"
        );
        self.adapter.create_link(&params).await
    }
}
