use anyhow::Result;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::{Cli, Command};
use crate::config::settings;
use crate::core::reveal;
use crate::core::store::{ProviderStore, StoreError};
use crate::core::ProviderMode;

pub const RELOAD_HINT: &str = "Open a new terminal or reload your shell (source ~/.zshrc).";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("OpenRouter API key is missing.")]
    MissingApiKey,

    #[error("Failed to write provider file")]
    Write(#[from] StoreError),
}

/// Outcome of an activate request.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Nothing changed on disk.
    AlreadyActive(ProviderMode),
    /// File rewritten; carries the mode read back from disk.
    Activated(ProviderMode),
}

#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub mode: ProviderMode,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub path: String,
    pub exists: bool,
    pub has_key: bool,
    #[serde(skip)]
    pub masked_key: Option<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let path = settings::resolve_provider_file(cli.file.as_deref());
    let store = ProviderStore::new(path);
    debug!(path = %store.path().display(), "using provider file");

    match cli.command.unwrap_or(Command::Status { json: false }) {
        Command::Status { json } => {
            let status = status(&store);
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", render_status(&status));
            }
        }
        Command::Use { mode, key, force } => {
            let outcome = activate(&store, mode, key.as_deref(), force)?;
            println!("{}", describe(&outcome));
        }
        Command::Toggle { key } => {
            let target = store.detect_mode().toggle();
            let outcome = activate(&store, target, key.as_deref(), false)?;
            println!("{}", describe(&outcome));
        }
        Command::Path => println!("{}", store.path().display()),
        Command::Reveal => reveal::reveal(store.path()),
    }

    Ok(())
}

/// The saved key, only when the file is in OpenRouter mode.
pub fn saved_key(store: &ProviderStore) -> Option<String> {
    match store.detect_mode() {
        ProviderMode::OpenRouter => store.load_secret(),
        ProviderMode::Subscription => None,
    }
}

/// Switch to `mode`. An OpenRouter key falls back to the saved one and must be non-empty.
pub fn activate(
    store: &ProviderStore,
    mode: ProviderMode,
    key: Option<&str>,
    force: bool,
) -> Result<Activation, CliError> {
    let active = store.detect_mode();
    let saved = saved_key(store);

    let key = match mode {
        ProviderMode::OpenRouter => {
            let key = key.map(str::to_string).or_else(|| saved.clone()).unwrap_or_default();
            if key.is_empty() {
                return Err(CliError::MissingApiKey);
            }
            Some(key)
        }
        ProviderMode::Subscription => None,
    };

    let unchanged = mode == active
        && match mode {
            ProviderMode::Subscription => true,
            ProviderMode::OpenRouter => key == saved,
        };
    if unchanged && !force {
        debug!(mode = mode.id(), "mode already active, skipping write");
        return Ok(Activation::AlreadyActive(mode));
    }

    store.write_config(mode, key.as_deref())?;
    Ok(Activation::Activated(store.detect_mode()))
}

pub fn describe(outcome: &Activation) -> String {
    match outcome {
        Activation::AlreadyActive(mode) => format!("{} is already active.", mode),
        Activation::Activated(mode) => format!("Activated {}. {}", mode, RELOAD_HINT),
    }
}

pub fn status(store: &ProviderStore) -> Status {
    let mode = store.detect_mode();
    let key = saved_key(store).filter(|k| !k.is_empty());
    Status {
        mode,
        display_name: mode.display_name(),
        icon: mode.icon_name(),
        path: store.path().display().to_string(),
        exists: store.exists(),
        has_key: key.is_some(),
        masked_key: key.as_deref().map(mask_key),
    }
}

pub fn render_status(status: &Status) -> String {
    let mut lines = vec![format!("Active: {}", status.mode)];
    if status.mode == ProviderMode::OpenRouter {
        match &status.masked_key {
            Some(masked) => lines.push(format!("API key: {}", masked)),
            None => lines.push("API key: not set".to_string()),
        }
    }
    let suffix = if status.exists { "" } else { " (not created yet)" };
    lines.push(format!("File: {}{}", status.path, suffix));
    lines.join("\n")
}

/// Show at most the first and last four characters of a key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}
