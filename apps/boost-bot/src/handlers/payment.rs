use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Оплата успешно завершена!";

/// Payment notification endpoint, accepting any JSON body.
///
/// Acknowledged unconditionally: the signature is not verified and nothing
/// is correlated with the order that produced it. LiqPay itself posts
/// form-encoded `data`/`signature` fields, which this JSON route rejects;
/// the `data` decode below only fires for JSON bodies that carry a LiqPay
/// blob and exists for logging.
pub async fn payment_callback(Json(payload): Json<Value>) -> Json<Value> {
    info!("Received LiqPay callback: {}", payload);

    if let Some(data) = payload.get("data").and_then(Value::as_str) {
        match liqpay::decode_data(data) {
            Ok(decoded) => info!(
                order_id = ?decoded.get("order_id"),
                status = ?decoded.get("status"),
                "Decoded LiqPay callback data (unverified)"
            ),
            Err(e) => warn!("Callback data field is not a LiqPay payload: {}", e),
        }
    }

    Json(json!({ "status": "ok" }))
}

/// Landing page for the checkout `result_url`.
pub async fn payment_success() -> Json<Value> {
    Json(json!({ "message": PAYMENT_SUCCESS_MESSAGE }))
}
