//! Telegram channel — receives updates via the Telegram API and routes them
//! into the [`ChatHandler`].
//!
//! Commands are parsed with the `BotCommands` derive; style buttons arrive as
//! callback queries carrying `style_<key>` payloads; everything else that
//! carries text is treated as improve input. Free text starting with `/` is
//! an unrecognised command and is ignored rather than forwarded to the LLM.

use std::sync::Arc;

use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::command::BotCommands;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::handler::ChatHandler;

// ── Constants ────────────────────────────────────────────────────────────────

/// Telegram has a 4096 character limit per message.
/// We chunk at 4000 to be safe.
const MAX_MESSAGE_LENGTH: usize = 4000;

/// Callback payload prefix for style buttons (`style_official`, …).
const CALLBACK_PREFIX: &str = "style_";

// ── Commands ─────────────────────────────────────────────────────────────────

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
    Help,
    Improve,
    Style,
    Reset,
}

// ── run ──────────────────────────────────────────────────────────────────────

/// Run the long-polling dispatcher until `shutdown` is cancelled.
pub async fn run(
    token: String,
    chat: Arc<ChatHandler>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    info!("telegram channel starting");

    let bot = Bot::new(token);

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_callback_query().endpoint(on_style_chosen))
        .branch(Update::filter_message().endpoint(on_text));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![chat])
        .build();

    tokio::select! {
        biased;

        _ = shutdown.cancelled() => {
            info!("shutdown signal received — closing telegram channel");
        }
        _ = dispatcher.dispatch() => {
            warn!("telegram dispatcher exited unexpectedly");
        }
    }

    Ok(())
}

// ── Update handlers ──────────────────────────────────────────────────────────

async fn on_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    chat: Arc<ChatHandler>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, chat.start_text()).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, chat.help_text()).await?;
        }
        Command::Improve | Command::Style => {
            let (text, presets) = chat.style_menu();
            let keyboard = InlineKeyboardMarkup::new(presets.iter().map(|p| {
                vec![InlineKeyboardButton::callback(
                    p.label,
                    format!("{CALLBACK_PREFIX}{}", p.key),
                )]
            }));
            bot.send_message(msg.chat.id, text)
                .reply_markup(keyboard)
                .await?;
        }
        Command::Reset => {
            let reply = chat.reset(msg.chat.id.0);
            bot.send_message(msg.chat.id, reply).await?;
        }
    }
    Ok(())
}

async fn on_style_chosen(
    bot: Bot,
    q: CallbackQuery,
    chat: Arc<ChatHandler>,
) -> ResponseResult<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(key) = q.data.as_deref().and_then(|d| d.strip_prefix(CALLBACK_PREFIX)) else {
        debug!(data = ?q.data, "callback query with unrecognised payload");
        return Ok(());
    };

    if let Some(message) = &q.message {
        let chat_id = message.chat().id;
        let reply = chat.select_style(chat_id.0, key);
        bot.send_message(chat_id, reply).await?;
    }
    Ok(())
}

async fn on_text(bot: Bot, msg: Message, chat: Arc<ChatHandler>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Unrecognised commands fall through the command filter; don't feed them
    // to the LLM.
    if text.starts_with('/') {
        return Ok(());
    }

    debug!(chat = msg.chat.id.0, len = text.len(), "telegram received text");
    let reply = chat.improve(msg.chat.id.0, text).await;
    send_chunked(&bot, msg.chat.id, &reply).await
}

// ── Reply chunking ───────────────────────────────────────────────────────────

async fn send_chunked(bot: &Bot, chat_id: ChatId, text: &str) -> ResponseResult<()> {
    for chunk in chunks(text) {
        bot.send_message(chat_id, chunk).await?;
    }
    Ok(())
}

/// Split a reply into Telegram-sized chunks, counting chars (not bytes) so
/// multi-byte text never splits mid-character.
fn chunks(text: &str) -> Vec<String> {
    let text = if text.is_empty() { "(empty response)" } else { text };
    text.chars()
        .collect::<Vec<_>>()
        .chunks(MAX_MESSAGE_LENGTH)
        .map(|c| c.iter().collect())
        .collect()
}
