use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::bot::router::{route_message, MessageRoute};
use crate::bot::screens::{self, Screen};
use crate::bot::utils::send_screen;
use crate::bot::HandlerError;
use crate::AppState;

const FALLBACK_NAME: &str = "друг";

pub async fn message_handler(bot: Bot, msg: Message, state: AppState) -> Result<(), HandlerError> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(route) = route_message(text) else {
        debug!("Ignoring unrouted message: {:?}", text);
        return Ok(());
    };
    info!(chat_id = msg.chat.id.0, ?route, "Received message");

    let first_name = msg
        .from
        .as_ref()
        .map(|u| u.first_name.as_str())
        .unwrap_or(FALLBACK_NAME);
    let screen = render_message(&route, first_name, &state);

    if route == MessageRoute::Start {
        start(&bot, msg.chat.id, screen).await;
        return Ok(());
    }

    send_screen(&bot, msg.chat.id, screen).await?;
    Ok(())
}

pub fn render_message(route: &MessageRoute, first_name: &str, state: &AppState) -> Screen {
    match route {
        MessageRoute::Start => screens::welcome(first_name),
        MessageRoute::OrderBoost => screens::boost_menu(),
        MessageRoute::Help => screens::help(&state.config.support_contact),
        MessageRoute::MyOrder => screens::my_order(),
    }
}

// The only handler that reports its own failure to the user.
async fn start(bot: &Bot, chat_id: ChatId, screen: Screen) {
    if let Err(e) = send_screen(bot, chat_id, screen).await {
        error!("Error while handling /start: {}", e);
        if let Err(e) = bot.send_message(chat_id, screens::START_FAILED).await {
            error!("Failed to send /start apology: {}", e);
        }
    }
}
