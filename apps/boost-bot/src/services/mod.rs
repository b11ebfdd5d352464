pub mod pay_service;
pub mod payment;
