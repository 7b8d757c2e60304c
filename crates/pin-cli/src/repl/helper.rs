use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use pin_core::workspace::View;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use super::command::{COMMAND_NAMES, TARGET_COMMANDS, Target};

/// Completion for the workspace REPL.
///
/// Completes slash commands, view names after `/view`, and the ids listed on
/// the current screen after `/resume`, `/close`, `/reopen` and `/show`. The
/// REPL refreshes the listed ids after every render.
#[derive(Clone)]
pub struct ReplHelper {
    commands: Vec<String>,
    views: Vec<String>,
    targets: Vec<Target>,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.iter().map(|name| format!("/{name}")).collect(),
            views: View::iter().map(|view| view.as_str().to_string()).collect(),
            targets: Vec::new(),
        }
    }

    pub fn set_targets(&mut self, targets: Vec<Target>) {
        self.targets = targets;
    }

    /// Start offset and candidates for the word ending at the cursor.
    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        if !line.starts_with('/') {
            return (0, Vec::new());
        }

        let Some((command, arg)) = line.split_once(' ') else {
            let pairs = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            return (0, pairs);
        };
        if arg.contains(char::is_whitespace) {
            return (0, Vec::new());
        }

        let start = command.len() + 1;
        let name = &command[1..];
        let pairs = if name == "view" {
            self.views
                .iter()
                .filter(|view| view.starts_with(arg))
                .map(|view| Pair {
                    display: view.clone(),
                    replacement: view.clone(),
                })
                .collect()
        } else if TARGET_COMMANDS.contains(&name) {
            self.targets
                .iter()
                .filter(|target| target.id.starts_with(arg))
                .map(|target| Pair {
                    display: format!("{}  {}", target.id, target.label),
                    replacement: target.id.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };
        (start, pairs)
    }
}

impl Default for ReplHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((command, rest)) if command.starts_with('/') => {
                Owned(format!("{} {}", command.bright_cyan(), rest.bold()))
            }
            None if line.starts_with('/') => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, pairs) = self.candidates(line);
        let typed = &line[start..];
        pairs
            .into_iter()
            .find(|pair| pair.replacement.len() > typed.len())
            .map(|pair| pair.replacement[typed.len()..].to_string())
    }
}

impl Validator for ReplHelper {}
