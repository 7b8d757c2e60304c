//! API key masking.
//!
//! Raw keys are never persisted. Only the display form produced here is
//! stored, and it cannot be turned back into the key.

/// Display value when no key has been entered.
pub const KEY_NOT_SET: &str = "not-set";
/// Display value for keys shorter than eight characters.
pub const SHORT_KEY_MASK: &str = "****";

const SHORT_KEY_LEN: usize = 8;
const PREFIX_CHARS: usize = 3;
const SUFFIX_CHARS: usize = 4;

/// Masks an API key for display.
///
/// - blank input: `not-set`
/// - fewer than 8 characters: `****`
/// - otherwise: first 3 and last 4 characters joined by `…`
pub fn mask_api_key(raw: &str) -> String {
    let key = raw.trim();
    let chars: Vec<char> = key.chars().collect();

    if chars.is_empty() {
        return KEY_NOT_SET.to_string();
    }
    if chars.len() < SHORT_KEY_LEN {
        return SHORT_KEY_MASK.to_string();
    }

    let prefix: String = chars[..PREFIX_CHARS].iter().collect();
    let suffix: String = chars[chars.len() - SUFFIX_CHARS..].iter().collect();
    format!("{prefix}…{suffix}")
}
