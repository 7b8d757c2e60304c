//! Chat naming heuristic.

/// Name every chat starts with until the first user message arrives.
pub const DEFAULT_CHAT_NAME: &str = "New Issue";
/// Name used when the heuristic yields nothing.
pub const FALLBACK_ISSUE_NAME: &str = "Issue";
/// Longest summary the heuristic produces, in characters.
pub const MAX_NAME_CHARS: usize = 60;

/// Derives a chat name from a user message.
///
/// Takes the text before the first period or line break, trims it and caps it
/// at [`MAX_NAME_CHARS`] characters. Falls back to "Issue" when empty.
pub fn summarize_issue_name(text: &str) -> String {
    let first = text.split(['.', '\n']).next().unwrap_or_default().trim();
    let summary: String = first.chars().take(MAX_NAME_CHARS).collect();
    if summary.is_empty() {
        FALLBACK_ISSUE_NAME.to_string()
    } else {
        summary
    }
}

/// Title of a ticket generated from a chat with the given name.
pub fn ticket_title(chat_name: &str) -> String {
    if chat_name.is_empty() || chat_name == DEFAULT_CHAT_NAME {
        FALLBACK_ISSUE_NAME.to_string()
    } else {
        chat_name.to_string()
    }
}
