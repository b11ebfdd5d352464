use teloxide::prelude::*;
use teloxide::types::MaybeInaccessibleMessage;
use tracing::warn;

use crate::bot::screens::{Markup, Screen};

pub async fn send_screen(bot: &Bot, chat_id: ChatId, screen: Screen) -> ResponseResult<Message> {
    let request = bot.send_message(chat_id, screen.text);
    match screen.markup {
        Markup::Reply(keyboard) => request.reply_markup(keyboard).await,
        Markup::Inline(keyboard) => request.reply_markup(keyboard).await,
        Markup::None => request.await,
    }
}

/// Replace the message a callback came from with `screen`.
///
/// Edited messages can only carry inline keyboards, so a reply-keyboard
/// screen is sent as a fresh message and the old one is deleted after it.
/// A failed delete only leaves a stale message behind and is not an error.
pub async fn edit_screen(
    bot: &Bot,
    message: &MaybeInaccessibleMessage,
    screen: Screen,
) -> ResponseResult<()> {
    let chat_id = message.chat().id;
    let message_id = message.id();
    let Screen { text, markup } = screen;

    match markup {
        Markup::Inline(keyboard) => {
            bot.edit_message_text(chat_id, message_id, text)
                .reply_markup(keyboard)
                .await?;
        }
        Markup::None => {
            bot.edit_message_text(chat_id, message_id, text).await?;
        }
        Markup::Reply(keyboard) => {
            send_screen(
                bot,
                chat_id,
                Screen {
                    text,
                    markup: Markup::Reply(keyboard),
                },
            )
            .await?;
            if let Err(e) = bot.delete_message(chat_id, message_id).await {
                warn!("Failed to delete message {} in chat {}: {}", message_id.0, chat_id.0, e);
            }
        }
    }
    Ok(())
}
