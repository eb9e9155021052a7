//! Conversation handler — transport-free orchestration of the improve flow.
//!
//! Owns all reply text. The Telegram layer translates updates into calls on
//! [`ChatHandler`] and sends whatever string comes back; nothing in here knows
//! about teloxide, so the whole state machine is testable with a mock provider.
//!
//! Per-conversation state machine: no style selected ⇄ style selected. A
//! completion failure never alters the selection — the user just resends.

use tracing::{debug, info};

use crate::llm::LlmProvider;
use crate::prompt;
use crate::selection::{ConversationId, SelectionStore};
use crate::styles::{self, StylePreset, STYLE_PRESETS};

pub const START_TEXT: &str =
    "Привет! Я улучшаю текст. Чтобы начать, используй команду /improve";

pub const HELP_TEXT: &str = "📚 Доступные команды:\n\
    /improve — выбрать стиль улучшения текста\n\
    /style — сменить стиль\n\
    /reset — сбросить выбранный стиль\n\
    /help — помощь";

pub const CHOOSE_STYLE_TEXT: &str = "Выбери стиль для улучшения текста:";

pub const RESET_TEXT: &str = "Стиль сброшен. Введите /improve, чтобы выбрать заново.";

pub const SELECT_FIRST_TEXT: &str = "Сначала выбери стиль командой /improve";

const VARIANTS_BANNER: &str = "✨ Вот улучшенные варианты:";

pub struct ChatHandler {
    store: SelectionStore,
    provider: LlmProvider,
    variant_count: u8,
}

impl ChatHandler {
    pub fn new(store: SelectionStore, provider: LlmProvider, variant_count: u8) -> Self {
        Self { store, provider, variant_count }
    }

    /// `/start` — informational, no state change.
    pub fn start_text(&self) -> &'static str {
        START_TEXT
    }

    /// `/help` — informational, no state change.
    pub fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    /// `/improve` and `/style` — the choices to present. No state change
    /// until a choice event arrives.
    pub fn style_menu(&self) -> (&'static str, &'static [StylePreset]) {
        (CHOOSE_STYLE_TEXT, &STYLE_PRESETS)
    }

    /// Style-choice event: unconditionally overwrite the selection.
    ///
    /// The key is stored as received; validity is checked at improve time so
    /// that a key injected outside the keyboard surfaces as "unknown style"
    /// rather than being silently dropped.
    pub fn select_style(&self, conversation: ConversationId, style_key: &str) -> String {
        self.store.set(conversation, style_key);
        info!(conversation, style = style_key, "style selected");
        format!("✅ Стиль выбран: {style_key}. Теперь отправь текст, который нужно улучшить.")
    }

    /// `/reset` — back to no-style-selected.
    pub fn reset(&self, conversation: ConversationId) -> String {
        self.store.clear(conversation);
        info!(conversation, "style reset");
        RESET_TEXT.to_string()
    }

    /// Free-text event: forward to the completion provider when a style is
    /// selected, otherwise prompt for a selection. Never touches the network
    /// without a valid selection.
    pub async fn improve(&self, conversation: ConversationId, text: &str) -> String {
        let Some(style) = self.store.get(conversation) else {
            debug!(conversation, "text received with no style selected");
            return SELECT_FIRST_TEXT.to_string();
        };

        let Some(instruction) = styles::instruction(&style) else {
            return format!("❌ Неизвестный стиль: {style}");
        };

        let system = prompt::improve_instruction(instruction, self.variant_count);
        let body = match self.provider.complete(&system, text).await {
            Ok(variants) => variants,
            Err(e) => format!("❌ Ошибка при обращении к DeepSeek: {e}"),
        };

        format!("{VARIANTS_BANNER}\n\n{body}")
    }
}
