use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{debug, info, warn};

use crate::bot::router::{route_callback, CallbackRoute};
use crate::bot::screens::{self, Screen};
use crate::bot::utils::edit_screen;
use crate::bot::HandlerError;
use crate::services::payment::PaymentError;
use crate::AppState;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: AppState,
) -> Result<(), HandlerError> {
    // Answered before routing so stale buttons stop spinning too.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!("Failed to answer callback query {:?}: {}", q.id, e);
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(route) = route_callback(data) else {
        debug!("Ignoring unrouted callback: {:?}", data);
        return Ok(());
    };
    let user_id = q.from.id.0;
    info!(user_id, data, "Received callback");

    let Some(message) = q.message.as_ref() else {
        warn!("Callback {:?} has no message to edit", data);
        return Ok(());
    };

    let screen = render_callback(&route, user_id, &state).await?;
    edit_screen(&bot, message, screen).await?;
    Ok(())
}

pub async fn render_callback(
    route: &CallbackRoute,
    user_id: u64,
    state: &AppState,
) -> Result<Screen, PaymentError> {
    let screen = match route {
        CallbackRoute::BoostRank => screens::rank_menu(),
        CallbackRoute::BoostMmr => screens::mmr_info(),
        CallbackRoute::BackMain => screens::main_section(),
        CallbackRoute::BackBoost => screens::boost_menu(),
        CallbackRoute::SelectRank(rank_key) => screens::rank_confirmation(rank_key),
        CallbackRoute::ConfirmRank(rank_key) => {
            let link = state.pay_service.checkout_link(rank_key, user_id).await?;
            screens::payment_link(rank_key, &link)
        }
    };
    Ok(screen)
}
