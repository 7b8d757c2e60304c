//! Interactive workspace.

mod command;
mod helper;
mod render;

use anyhow::Result;
use colored::Colorize;
use pin_application::{Outcome, WorkspaceController};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use self::command::Command;
use self::helper::ReplHelper;
use crate::context::AppContext;

const HELP: &str = "\
Plain text sends a message in the current chat.
  /new /open /tickets /closed   switch view (/view <name> for any view)
  /ticket                       generate a ticket from the current chat
  /close [n|id]                 close the current chat, or a listed one
  /resume <n|id>                resume an open chat
  /reopen <n|id>                re-open a closed chat
  /show <n|id>  /back  /chat    ticket detail, back to list, resume its chat
  /logout  /quit                quit also works outside a chat";

pub fn run(ctx: &AppContext) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    println!("{}", "=== Pin Workspace ===".bright_magenta().bold());
    println!("{}", "Type /help for commands, /quit to exit.".bright_black());

    let mut screen = workspace.start()?;
    render::screen(&screen);
    refresh_targets(&mut rl, &screen);

    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        let outcome = match command::parse(&line, &screen) {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP.bright_black());
                continue;
            }
            Command::Invalid(message) => {
                println!("{}", message.yellow());
                continue;
            }
            Command::Navigate(name) => workspace.navigate(&name)?,
            Command::Act(action) => dispatch(&mut workspace, &screen, action)?,
        };

        match outcome {
            Outcome::Screen(next) => {
                if next.subscription == screen.subscription {
                    render::latest_reply(&next);
                } else {
                    render::screen(&next);
                }
                screen = next;
                refresh_targets(&mut rl, &screen);
            }
            Outcome::Redirect(page) => {
                println!("{}", format!("Logged out, returning to {page}.").bright_green());
                break;
            }
            Outcome::Ignored => println!("{}", "Nothing to do here.".bright_black()),
        }
    }

    Ok(())
}

fn refresh_targets(rl: &mut Editor<ReplHelper, DefaultHistory>, screen: &pin_application::Screen) {
    if let Some(helper) = rl.helper_mut() {
        helper.set_targets(command::targets(screen));
    }
}

fn dispatch(
    workspace: &mut WorkspaceController,
    screen: &pin_application::Screen,
    action: pin_application::Action,
) -> Result<Outcome> {
    tracing::debug!(subscription = %screen.subscription, ?action, "dispatching");
    Ok(workspace.dispatch(screen.subscription, action)?)
}
