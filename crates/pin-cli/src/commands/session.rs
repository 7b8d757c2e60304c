use anyhow::Result;
use colored::Colorize;
use pin_application::{AuthGate, Entry, LoginController};

use crate::context::AppContext;

pub fn login(
    ctx: &AppContext,
    company: Option<String>,
    email: Option<String>,
    department: Option<String>,
) -> Result<()> {
    let controller = LoginController::new(ctx.repos().sessions.clone());
    let mut form = controller.form()?;
    if let Some(company) = company {
        form.company = company;
    }
    if let Some(email) = email {
        form.email = email;
    }
    if let Some(department) = department {
        form.department = department;
    }

    let (session, _) = controller.login(&form)?;
    println!(
        "{} {} ({}, {})",
        "Logged in as".green(),
        session.email.bold(),
        session.company,
        session.department
    );
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    AuthGate::new(ctx.repos().sessions.clone()).logout()?;
    println!("{}", "Logged out.".green());
    Ok(())
}

pub fn reset_login(ctx: &AppContext) -> Result<()> {
    let form = LoginController::new(ctx.repos().sessions.clone()).reset()?;
    println!(
        "{} {} / {} / {}",
        "Login form reset to".green(),
        form.company,
        form.email,
        form.department
    );
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    match AuthGate::new(ctx.repos().sessions.clone()).require()? {
        Entry::Ready(session) => {
            println!("{:<12}{}", "Company", session.company);
            println!("{:<12}{}", "User", session.email);
            println!("{:<12}{}", "Department", session.department);
            println!("{:<12}{}", "Since", session.issued_at.to_rfc3339());
        }
        Entry::Redirect(_) => println!("{}", "Not logged in.".yellow()),
    }
    Ok(())
}
