use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::error::LiqPayError;
use crate::params::CheckoutParams;

pub const CHECKOUT_URL: &str = "https://www.liqpay.ua/api/3/checkout";

#[derive(Serialize)]
struct SignedParams<'a> {
    public_key: &'a str,
    #[serde(flatten)]
    params: &'a CheckoutParams,
}

#[derive(Clone)]
pub struct LiqPay {
    public_key: String,
    private_key: String,
}

impl std::fmt::Debug for LiqPay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiqPay")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl LiqPay {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base64 of the JSON params with `public_key` prepended.
    pub fn cnb_data(&self, params: &CheckoutParams) -> Result<String, LiqPayError> {
        if self.public_key.trim().is_empty() {
            return Err(LiqPayError::MissingKey("public"));
        }

        let json = serde_json::to_string(&SignedParams {
            public_key: &self.public_key,
            params,
        })?;
        Ok(STANDARD.encode(json))
    }

    /// `base64(sha1(private_key + data + private_key))`
    pub fn sign(&self, data: &str) -> Result<String, LiqPayError> {
        if self.private_key.trim().is_empty() {
            return Err(LiqPayError::MissingKey("private"));
        }

        let mut hasher = Sha1::new();
        hasher.update(self.private_key.as_bytes());
        hasher.update(data.as_bytes());
        hasher.update(self.private_key.as_bytes());
        Ok(STANDARD.encode(hasher.finalize()))
    }

    pub fn cnb_signature(&self, params: &CheckoutParams) -> Result<String, LiqPayError> {
        let data = self.cnb_data(params)?;
        self.sign(&data)
    }

    /// Hosted checkout URL carrying the signed params in its query string.
    pub fn cnb_link(&self, params: &CheckoutParams) -> Result<String, LiqPayError> {
        let data = self.cnb_data(params)?;
        let signature = self.sign(&data)?;

        Ok(format!(
            "{}?data={}&signature={}",
            CHECKOUT_URL,
            urlencoding::encode(&data),
            urlencoding::encode(&signature)
        ))
    }
}

/// Decode a LiqPay `data` blob (as found in checkout links and server
/// callbacks) back into JSON. The signature is not checked.
pub fn decode_data(data: &str) -> Result<serde_json::Value, LiqPayError> {
    let raw = STANDARD.decode(data.trim())?;
    Ok(serde_json::from_slice(&raw)?)
}
