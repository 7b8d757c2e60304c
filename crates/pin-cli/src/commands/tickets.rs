use anyhow::Result;
use colored::Colorize;

use crate::context::AppContext;

pub fn list(ctx: &AppContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    let tickets = &workspace.state().tickets;
    if tickets.is_empty() {
        println!("{}", "No tickets yet.".bright_black());
        return Ok(());
    }
    for ticket in tickets {
        println!(
            "{}  {}  {}",
            ticket.id.bold(),
            ticket.created_at.to_rfc3339().bright_black(),
            ticket.title
        );
    }
    Ok(())
}

pub fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let workspace = ctx.workspace()?;
    let ticket = workspace.ticket(id)?;
    println!("{}", serde_json::to_string_pretty(&ticket.payload)?);
    Ok(())
}
