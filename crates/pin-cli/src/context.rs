//! Wiring from flags and settings to repositories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use pin_application::{AdminController, Entry, Page, WorkspaceController};
use pin_infrastructure::{JsonFileStore, PinPaths, PinSettings, Repositories};

pub struct AppContext {
    data_dir: PathBuf,
    log_level: String,
    repos: Repositories,
}

impl AppContext {
    pub fn load(data_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self> {
        let settings = PinSettings::load().context("Failed to load settings")?;
        let data_dir = PinPaths::resolve_data_dir(data_dir, settings.data_dir.clone())?;
        let store = JsonFileStore::open(&data_dir)
            .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;

        Ok(Self {
            data_dir,
            log_level: log_level.unwrap_or(settings.log_level),
            repos: Repositories::new(Arc::new(store)),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn repos(&self) -> &Repositories {
        &self.repos
    }

    pub fn workspace(&self) -> Result<WorkspaceController> {
        let entry = WorkspaceController::open(
            self.repos.sessions.clone(),
            self.repos.conversations.clone(),
            self.repos.admin.clone(),
        )?;
        ready(entry)
    }

    pub fn admin(&self) -> Result<AdminController> {
        let entry = AdminController::open(self.repos.sessions.clone(), self.repos.admin.clone())?;
        ready(entry)
    }
}

fn ready<T>(entry: Entry<T>) -> Result<T> {
    match entry {
        Entry::Ready(controller) => Ok(controller),
        Entry::Redirect(Page::Login) => bail!("Not logged in. Run `pin login` first."),
        Entry::Redirect(page) => bail!("Redirected to {page}"),
    }
}
