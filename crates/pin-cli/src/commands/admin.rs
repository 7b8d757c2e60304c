use anyhow::{Context, Result};
use colored::Colorize;
use pin_application::{AdminPanel, AdminView, FlowsUpdate, LlmUpdate, RagUpdate};
use pin_core::admin::{AuditEntry, LlmProvider};

use crate::context::AppContext;

pub fn show(ctx: &AppContext) -> Result<()> {
    let admin = ctx.admin()?;
    println!("{}", serde_json::to_string_pretty(admin.config())?);
    Ok(())
}

pub fn llm(
    ctx: &AppContext,
    provider: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    let mut admin = ctx.admin()?;
    if provider.is_none() && model.is_none() && api_key.is_none() {
        print_panel(&admin.route(AdminView::Llm)?);
        return Ok(());
    }

    let provider = provider
        .map(|name| {
            name.trim()
                .parse::<LlmProvider>()
                .with_context(|| format!("Unknown provider '{name}'"))
        })
        .transpose()?;
    let settings = admin.save_llm(&LlmUpdate {
        provider,
        model,
        api_key,
    })?;
    println!(
        "{} provider={} model={} key={}",
        "Saved LLM settings.".green(),
        settings.provider,
        settings.model,
        settings.api_key_masked
    );
    Ok(())
}

pub fn rag(ctx: &AppContext, top_k: Option<u32>, min_score: Option<f64>) -> Result<()> {
    let mut admin = ctx.admin()?;
    if top_k.is_none() && min_score.is_none() {
        print_panel(&admin.route(AdminView::Rag)?);
        return Ok(());
    }

    let settings = admin.save_rag(&RagUpdate { top_k, min_score })?;
    println!(
        "{} topK={} minScore={}",
        "Saved RAG settings.".green(),
        settings.top_k,
        settings.min_score
    );
    Ok(())
}

pub fn flows(ctx: &AppContext, max_turns: Option<u32>) -> Result<()> {
    let mut admin = ctx.admin()?;
    if max_turns.is_none() {
        print_panel(&admin.route(AdminView::Flows)?);
        return Ok(());
    }

    let settings = admin.save_flows(&FlowsUpdate {
        max_turns_before_escalate: max_turns,
    })?;
    println!(
        "{} maxTurnsBeforeEscalate={}",
        "Saved flow rules.".green(),
        settings.max_turns_before_escalate
    );
    Ok(())
}

pub fn audit(ctx: &AppContext) -> Result<()> {
    let admin = ctx.admin()?;
    print_panel(&admin.route(AdminView::Audit)?);
    Ok(())
}

fn print_panel(panel: &AdminPanel) {
    match panel {
        AdminPanel::Llm {
            settings,
            providers,
        } => {
            println!("{}", "LLM Settings".bold());
            let names: Vec<String> = providers.iter().map(ToString::to_string).collect();
            println!("  provider  {} ({})", settings.provider, names.join(", "));
            println!("  model     {}", settings.model);
            println!("  API key   {}", settings.api_key_masked);
        }
        AdminPanel::Rag(settings) => {
            println!("{}", "RAG Settings".bold());
            println!("  topK      {}", settings.top_k);
            println!("  minScore  {}", settings.min_score);
        }
        AdminPanel::Flows(settings) => {
            println!("{}", "Flow Rules".bold());
            println!(
                "  maxTurnsBeforeEscalate  {}",
                settings.max_turns_before_escalate
            );
        }
        AdminPanel::Audit(entries) => {
            println!("{}", "Audit Log".bold());
            if entries.is_empty() {
                println!("{}", "No changes yet.".bright_black());
            }
            for entry in entries {
                print_audit_entry(entry);
            }
        }
    }
}

fn print_audit_entry(entry: &AuditEntry) {
    println!(
        "{}  {} {}",
        entry.action.bold(),
        "by".bright_black(),
        entry.actor
    );
    println!("  {}", entry.ts.to_rfc3339().bright_black());
    println!("  {}", entry.detail);
}
