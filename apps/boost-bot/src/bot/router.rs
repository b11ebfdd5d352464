//! Maps raw message text and callback data to routes.
//!
//! Matching is literal: menu taps compare the whole text, callbacks compare
//! the whole payload or a fixed prefix. Anything unmatched yields `None` and
//! is dropped by the handlers.

pub const BTN_ORDER_BOOST: &str = "📈 Заказать буст";
pub const BTN_HELP: &str = "ℹ️ Помощь";
pub const BTN_MY_ORDER: &str = "Мой заказ";

pub const CB_BOOST_RANK: &str = "boost_rank";
pub const CB_BOOST_MMR: &str = "boost_mmr";
pub const CB_BACK_MAIN: &str = "back_main";
pub const CB_BACK_BOOST: &str = "back_boost";
pub const RANK_PREFIX: &str = "rank_";
pub const CONFIRM_PREFIX: &str = "confirm_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRoute {
    Start,
    OrderBoost,
    Help,
    MyOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackRoute {
    BoostRank,
    BoostMmr,
    BackMain,
    BackBoost,
    /// Full rank key, e.g. `rank_master`.
    SelectRank(String),
    /// Rank key with the `confirm_` prefix stripped.
    ConfirmRank(String),
}

pub fn route_message(text: &str) -> Option<MessageRoute> {
    if is_start_command(text) {
        return Some(MessageRoute::Start);
    }

    match text {
        BTN_ORDER_BOOST => Some(MessageRoute::OrderBoost),
        BTN_HELP => Some(MessageRoute::Help),
        BTN_MY_ORDER => Some(MessageRoute::MyOrder),
        _ => None,
    }
}

// `/start`, `/start <payload>` and `/start@botname`.
fn is_start_command(text: &str) -> bool {
    match text.strip_prefix("/start") {
        Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('@'),
        None => false,
    }
}

pub fn route_callback(data: &str) -> Option<CallbackRoute> {
    match data {
        CB_BOOST_RANK => Some(CallbackRoute::BoostRank),
        CB_BOOST_MMR => Some(CallbackRoute::BoostMmr),
        CB_BACK_MAIN => Some(CallbackRoute::BackMain),
        CB_BACK_BOOST => Some(CallbackRoute::BackBoost),
        _ if data.starts_with(RANK_PREFIX) => Some(CallbackRoute::SelectRank(data.to_string())),
        _ => data
            .strip_prefix(CONFIRM_PREFIX)
            .map(|key| CallbackRoute::ConfirmRank(key.to_string())),
    }
}

pub fn confirm_data(rank_key: &str) -> String {
    format!("{}{}", CONFIRM_PREFIX, rank_key)
}
