//! System-prompt construction for the improve flow.

/// Build the system instruction for a given style fragment and variant count.
///
/// This is a formatting contract with the remote model, not something we can
/// enforce on the response: the model is asked for exactly `variant_count`
/// numbered rewrites with no explanatory prose.
pub fn improve_instruction(style_instruction: &str, variant_count: u8) -> String {
    format!(
        "Ты помощник, который помогает улучшать текст. \
         Пользователь даёт текст, а ты возвращаешь {variant_count} улучшенных вариантов, \
         в заданном стиле. Вот стиль: {style_instruction}. \
         Не объясняй. Просто выдай {variant_count} вариантов, с нумерацией."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles;

    #[test]
    fn embeds_style_fragment() {
        let p = improve_instruction("улучшай текст в официальном деловом стиле", 3);
        assert!(p.contains("улучшай текст в официальном деловом стиле"));
    }

    #[test]
    fn embeds_variant_count_in_both_clauses() {
        let p = improve_instruction("стиль", 3);
        assert!(p.contains("возвращаешь 3 улучшенных вариантов"));
        assert!(p.contains("выдай 3 вариантов, с нумерацией"));
    }

    #[test]
    fn works_for_every_registered_style() {
        for preset in &styles::STYLE_PRESETS {
            let p = improve_instruction(preset.instruction, 3);
            assert!(p.contains(preset.instruction));
        }
    }
}
