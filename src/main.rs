//! pravka-bot — entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Build the LLM provider
//!   5. Run the Telegram dispatcher until Ctrl-C

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use pravka_bot::error::AppError;
use pravka_bot::handler::ChatHandler;
use pravka_bot::selection::SelectionStore;
use pravka_bot::{config, llm, logger, telegram};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    info!(
        bot_name = %config.bot_name,
        provider = %config.llm.provider,
        variant_count = config.variant_count,
        "config loaded"
    );

    let token = config
        .telegram_token
        .clone()
        .ok_or_else(|| AppError::Telegram("TELEGRAM_BOT_TOKEN not set".into()))?;

    let provider = llm::providers::build(&config.llm, config.llm_api_key.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;

    let chat = Arc::new(ChatHandler::new(
        SelectionStore::new(),
        provider,
        config.variant_count,
    ));

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.cancel();
        }
    });

    telegram::run(token, chat, shutdown).await
}
