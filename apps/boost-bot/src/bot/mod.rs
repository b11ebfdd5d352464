use anyhow::Context;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::{dptree, prelude::*, types::Update};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::services::payment::PaymentError;
use crate::AppState;

pub mod handlers;
pub mod keyboards;
pub mod router;
pub mod screens;
pub mod utils;


#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Payment link generation failed: {0}")]
    Payment(#[from] PaymentError),
}

/// Long-poll Telegram until the dispatcher stops or shutdown is signalled.
pub async fn run_bot(
    bot: Bot,
    mut shutdown_signal: broadcast::Receiver<()>,
    state: AppState,
) -> anyhow::Result<()> {
    info!("Starting bot dispatcher...");

    let me = bot
        .get_me()
        .await
        .context("Bot failed to connect to Telegram")?;
    info!(
        "Bot connected as: @{}",
        me.username.clone().unwrap_or_else(|| "unknown".into())
    );

    // Polling and a registered webhook are mutually exclusive.
    bot.delete_webhook()
        .drop_pending_updates(true)
        .await
        .context("Failed to delete webhook")?;

    let message_handler = Update::filter_message().endpoint(handlers::command::message_handler);
    let callback_handler =
        Update::filter_callback_query().endpoint(handlers::callback::callback_handler);

    let mut dispatcher = Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(message_handler)
            .branch(callback_handler),
    )
    .dependencies(dptree::deps![state])
    .default_handler(|upd: Arc<Update>| async move {
        debug!("Dropping unhandled update {:?}", upd.id);
    })
    .error_handler(LoggingErrorHandler::with_custom_text(
        "An error occurred while handling an update",
    ))
    .build();

    tokio::select! {
        _ = dispatcher.dispatch() => {
            info!("Bot dispatcher exited");
        }
        _ = shutdown_signal.recv() => {
            info!("Bot received shutdown signal, stopping...");
        }
    }
    Ok(())
}
