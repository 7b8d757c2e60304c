use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod context;
mod logging;
mod repl;

use context::AppContext;

#[derive(Parser)]
#[command(name = "pin")]
#[command(about = "Pin - conversational IT helpdesk workspace", long_about = None)]
struct Cli {
    /// Directory holding the stored session, chats and admin settings
    #[arg(long, global = true, env = "PIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Tracing filter, e.g. `info` or `pin_application=debug`
    #[arg(long, global = true, env = "PIN_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in (no credentials are checked)
    Login {
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Delete the stored session
    Logout,
    /// Forget the remembered login values
    ResetLogin,
    /// Show the current session
    Whoami,
    /// Open the interactive chat workspace
    Workspace,
    /// Inspect and edit admin settings
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Inspect generated tickets
    Tickets {
        #[command(subcommand)]
        action: TicketsAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show the full configuration
    Show,
    /// Show or update LLM settings
    Llm {
        /// `mock` or `openai_compat`
        #[arg(long)]
        provider: Option<String>,
        #[arg(long)]
        model: Option<String>,
        /// Only a masked form is stored
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Show or update retrieval settings
    Rag {
        #[arg(long)]
        top_k: Option<u32>,
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Show or update flow rules
    Flows {
        #[arg(long)]
        max_turns: Option<u32>,
    },
    /// Show the audit log
    Audit,
}

#[derive(Subcommand)]
enum TicketsAction {
    /// List created tickets
    List,
    /// Print one ticket payload as JSON
    Show { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::load(cli.data_dir, cli.log_level)?;
    logging::init_tracing(ctx.log_level());
    tracing::debug!(data_dir = %ctx.data_dir().display(), "using data directory");

    match cli.command {
        Commands::Login {
            company,
            email,
            department,
        } => commands::session::login(&ctx, company, email, department)?,
        Commands::Logout => commands::session::logout(&ctx)?,
        Commands::ResetLogin => commands::session::reset_login(&ctx)?,
        Commands::Whoami => commands::session::whoami(&ctx)?,
        Commands::Workspace => repl::run(&ctx)?,
        Commands::Admin { action } => match action {
            AdminAction::Show => commands::admin::show(&ctx)?,
            AdminAction::Llm {
                provider,
                model,
                api_key,
            } => commands::admin::llm(&ctx, provider, model, api_key)?,
            AdminAction::Rag { top_k, min_score } => commands::admin::rag(&ctx, top_k, min_score)?,
            AdminAction::Flows { max_turns } => commands::admin::flows(&ctx, max_turns)?,
            AdminAction::Audit => commands::admin::audit(&ctx)?,
        },
        Commands::Tickets { action } => match action {
            TicketsAction::List => commands::tickets::list(&ctx)?,
            TicketsAction::Show { id } => commands::tickets::show(&ctx, &id)?,
        },
    }

    Ok(())
}
