use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiqPayError {
    #[error("LiqPay {0} key is not configured")]
    MissingKey(&'static str),

    #[error("Failed to serialize checkout params: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid base64 in LiqPay data: {0}")]
    Decode(#[from] base64::DecodeError),
}
