use regex::Regex;
use std::sync::OnceLock;

fn sentence_break() -> &'static Regex {
    static BREAK: OnceLock<Regex> = OnceLock::new();
    BREAK.get_or_init(|| Regex::new(r"(?:\.|;|, then)\s+").unwrap())
}

/// Splits one instruction into the sentences that become separate steps.
///
/// Breaks on a period, a semicolon or ", then" followed by whitespace. Empty
/// pieces are dropped.
pub fn split_instruction(instruction: &str) -> Vec<String> {
    sentence_break()
        .split(instruction)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Capitalizes the first letter and makes sure the sentence ends with a period.
pub fn normalize_sentence(fragment: &str) -> String {
    let mut chars = fragment.chars();
    let mut text = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Lowercases the first letter so the tagger doesn't read an imperative verb
/// as a proper noun.
pub(crate) fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
