//! Minimal LiqPay checkout client.
//!
//! Builds the base64 `data` blob and SHA-1 `signature` LiqPay expects and
//! turns them into a hosted checkout link. No network calls are made here.

pub mod client;
pub mod error;
pub mod params;

pub use client::{decode_data, LiqPay, CHECKOUT_URL};
pub use error::LiqPayError;
pub use params::{Action, CheckoutParams, API_VERSION};
