mod markdown;
mod plain_text;
mod sanitize;

pub use markdown::markdown_to_html;
pub use plain_text::derive_plain_text;
pub use sanitize::sanitize_html;

use crate::domain::GenerationResult;

/// Runs raw model text through the full pipeline: markdown conversion,
/// allow-list sanitization, then plain-text derivation for export.
pub fn process(raw: &str) -> GenerationResult {
    let converted = markdown_to_html(raw);
    let html = sanitize_html(&converted);
    let plain_text = derive_plain_text(&html);
    GenerationResult {
        raw: raw.to_string(),
        html,
        plain_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_fragments_never_survive() {
        let result = process("before <script>alert(1)</script> **bold** after");
        assert!(!result.html.contains("<script"));
        assert!(!result.html.contains("alert(1)"));
        assert!(result.html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn round_trip_plain_text() {
        let result = process("**Hello** [placeholder]\n\n1. First\n2. Second");
        assert!(result.plain_text.contains("**Hello**"));
        assert!(result.plain_text.contains("[placeholder]"));
        assert_eq!(result.plain_text.matches("- ").count(), 2);
        assert!(!result.plain_text.contains("\n\n\n"));
    }

    #[test]
    fn single_paragraph_exports_cleanly() {
        let result = process("**Thank you** for the interview.");
        assert!(result.html.contains("<strong>Thank you</strong>"));
        assert_eq!(result.plain_text, "**Thank you** for the interview.");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let result = process("");
        assert!(result.html.is_empty());
        assert!(result.plain_text.is_empty());
    }
}
