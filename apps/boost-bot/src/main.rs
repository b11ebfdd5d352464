use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::Bot;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod catalog;
mod config;
mod handlers;
mod server;
mod services;
mod state;
mod supervisor;

use crate::config::BotConfig;
use crate::services::pay_service::PayService;
use crate::services::payment::liqpay_adapter::LiqPayAdapter;
pub use crate::state::AppState;
use crate::supervisor::{supervise, Task};

#[derive(Parser)]
#[command(name = "boost-bot")]
#[command(about = "MLBB boost shop Telegram bot with LiqPay checkout", version)]
struct Cli {
    /// TOML config file (environment variables are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot and the payment callback server (default)
    Serve,
    /// Print the rank price table
    Ranks,
    /// Print the checkout link the bot would send for a rank confirmation
    Link {
        /// Rank key, e.g. rank_master
        rank_key: String,
        /// Telegram user id placed in the order id
        user_id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = BotConfig::load(cli.config.as_deref())?;
            let _guard = init_tracing(config.log_dir.as_deref());
            run(config).await
        }
        Commands::Ranks => {
            println!("{:<18} {:<14} {:>6}", "KEY", "NAME", "UAH");
            for rank in catalog::RANKS.iter() {
                println!("{:<18} {:<14} {:>6}", rank.key, rank.name, rank.price);
            }
            Ok(())
        }
        Commands::Link { rank_key, user_id } => {
            let config = BotConfig::load(cli.config.as_deref())?;
            let link = pay_service(&config)
                .checkout_link(&rank_key, user_id)
                .await?;
            println!("{}", link);
            Ok(())
        }
    }
}

fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "boost-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boost_bot=debug,tower_http=info,teloxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn pay_service(config: &BotConfig) -> PayService {
    let adapter = LiqPayAdapter::new(
        config.liqpay_public_key.clone(),
        config.liqpay_private_key.clone(),
    );
    PayService::new(Arc::new(adapter), config.public_url.clone())
}

async fn run(config: BotConfig) -> Result<()> {
    tracing::info!("Boost bot starting, version {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Public URL: {}", config.public_url);

    let state = AppState {
        pay_service: pay_service(&config),
        config: Arc::new(config),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.listen_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let (shutdown_tx, _) = tokio::sync::broadcast::channel(1);
    let bot = Bot::new(state.config.bot_token.clone());

    let http = Task::spawn(
        "http server",
        server::run_server(listener, shutdown_tx.subscribe()),
    );
    let polling = Task::spawn(
        "bot",
        bot::run_bot(bot, shutdown_tx.subscribe(), state),
    );

    supervise(http, polling, shutdown_tx, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}
