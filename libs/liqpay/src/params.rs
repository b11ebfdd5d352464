use serde::{Deserialize, Serialize};

/// Checkout API version sent with every request.
pub const API_VERSION: &str = "3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Pay,
    Hold,
    Paydonate,
    Subscribe,
}

/// Parameter record for a checkout request.
///
/// Field order is the serialization order, which the signature depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutParams {
    pub action: Action,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub order_id: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

impl CheckoutParams {
    pub fn pay(
        amount: impl ToString,
        currency: &str,
        description: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            action: Action::Pay,
            amount: amount.to_string(),
            currency: currency.to_string(),
            description: description.into(),
            order_id: order_id.into(),
            version: API_VERSION.to_string(),
            result_url: None,
            server_url: None,
        }
    }

    pub fn with_result_url(mut self, url: impl Into<String>) -> Self {
        self.result_url = Some(url.into());
        self
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }
}
