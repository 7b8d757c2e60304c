//! Keyword-matching responder.

use super::{FollowUpContext, FollowUpStrategy};

/// Reply used when no rule matches.
pub const DEFAULT_PROMPT: &str =
    "Got it. What device are you on, and what error message (exact text) do you see?";

/// A lowercase keyword and the prompt it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub keyword: String,
    pub prompt: String,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            prompt: prompt.into(),
        }
    }
}

/// Matches the latest user message against an ordered rule list.
///
/// Matching is a lowercase substring test and the first matching rule wins.
/// The responder is stateless: nothing but the latest user message is read.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<KeywordRule>,
    default_prompt: String,
}

impl KeywordResponder {
    pub fn new(rules: Vec<KeywordRule>, default_prompt: impl Into<String>) -> Self {
        Self {
            rules,
            default_prompt: default_prompt.into(),
        }
    }

    /// The built-in IT triage rules (VPN, email, printer).
    pub fn helpdesk() -> Self {
        Self::new(
            vec![
                KeywordRule::new(
                    "vpn",
                    "VPN issue — which client (AnyConnect, GlobalProtect, Windows built-in) and are you offsite? Any error code?",
                ),
                KeywordRule::new(
                    "email",
                    "Email issue — is this Outlook, OWA, or mobile? Are you seeing a password prompt, or messages stuck sending?",
                ),
                KeywordRule::new(
                    "printer",
                    "Printer issue — what’s the printer name/IP and what exactly fails (release, print, or connection)?",
                ),
            ],
            DEFAULT_PROMPT,
        )
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    fn select(&self, text: &str) -> &str {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.keyword))
            .map(|rule| rule.prompt.as_str())
            .unwrap_or(self.default_prompt.as_str())
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::helpdesk()
    }
}

impl FollowUpStrategy for KeywordResponder {
    fn name(&self) -> &str {
        "keyword"
    }

    fn follow_up(&self, context: &FollowUpContext<'_>) -> String {
        self.select(context.last_user_text).to_string()
    }
}
