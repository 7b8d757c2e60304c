//! Workspace view names.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The four top-level views of the workspace.
///
/// Names round-trip through storage as camelCase strings. Unknown names
/// resolve to [`View::NewIssue`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "camelCase")]
pub enum View {
    #[default]
    NewIssue,
    OpenChats,
    CreatedTickets,
    ClosedTickets,
}

impl View {
    /// Resolves a view name, falling back to the new-issue view.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl From<String> for View {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        view.as_str().to_string()
    }
}
