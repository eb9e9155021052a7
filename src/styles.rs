//! Style registry — the fixed set of rewriting tones.
//!
//! Each preset carries the internal key (also used in callback payloads),
//! the button label shown in Telegram, and the Russian instruction fragment
//! embedded in the system prompt. The set is closed; adding a style means
//! adding an entry here and nothing else.

/// One rewriting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    /// Internal key, lowercase (`"official"`, …).
    pub key: &'static str,
    /// User-facing button label.
    pub label: &'static str,
    /// Instruction fragment spliced into the system prompt.
    pub instruction: &'static str,
}

/// All presets, in the order they appear on the keyboard.
pub const STYLE_PRESETS: [StylePreset; 4] = [
    StylePreset {
        key: "official",
        label: "Официальный",
        instruction: "улучшай текст в официальном деловом стиле",
    },
    StylePreset {
        key: "casual",
        label: "Разговорный",
        instruction: "улучшай текст в простом и понятном разговорном стиле",
    },
    StylePreset {
        key: "emotional",
        label: "Эмоциональный",
        instruction: "улучшай текст, делая его более ярким и эмоциональным",
    },
    StylePreset {
        key: "neutral",
        label: "Нейтральный",
        instruction: "улучшай текст грамотно, но без изменения общего тона",
    },
];

/// Look up the instruction fragment for `key`.
///
/// Case-insensitive: keys sourced from user-facing labels may arrive in any
/// case. Unknown keys return `None` — the caller must surface an "unknown
/// style" reply instead of proceeding to a network call.
pub fn instruction(key: &str) -> Option<&'static str> {
    let key = key.to_lowercase();
    STYLE_PRESETS
        .iter()
        .find(|p| p.key == key)
        .map(|p| p.instruction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_styles_resolve() {
        for p in &STYLE_PRESETS {
            assert_eq!(instruction(p.key), Some(p.instruction));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(instruction("OFFICIAL"), instruction("official"));
        assert_eq!(instruction("Casual"), instruction("casual"));
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(instruction("unknown_key"), None);
        assert_eq!(instruction(""), None);
    }

    #[test]
    fn keys_and_labels_are_distinct() {
        for (i, a) in STYLE_PRESETS.iter().enumerate() {
            for b in &STYLE_PRESETS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.label, b.label);
            }
        }
    }
}
