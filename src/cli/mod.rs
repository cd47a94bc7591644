pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::settings::PROVIDER_FILE_ENV;
use crate::core::ProviderMode;

#[derive(Parser, Debug)]
#[command(
    name = "claude-provider-switch",
    version,
    about = "Switch Claude Code between the subscription login and OpenRouter"
)]
pub struct Cli {
    /// Provider file to manage instead of ~/.config/claude-code/provider.zsh
    #[arg(long, global = true, value_name = "PATH", env = PROVIDER_FILE_ENV)]
    pub file: Option<String>,

    /// Log file access to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the active provider mode (default)
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Activate a provider mode
    Use {
        /// subscription or openrouter
        mode: ProviderMode,

        /// OpenRouter API key (defaults to the saved key)
        #[arg(long, short = 'k')]
        key: Option<String>,

        /// Rewrite the file even if the mode is already active
        #[arg(long)]
        force: bool,
    },
    /// Switch to the other provider mode
    Toggle {
        /// OpenRouter API key (defaults to the saved key)
        #[arg(long, short = 'k')]
        key: Option<String>,
    },
    /// Print the provider file path
    Path,
    /// Show the provider file in the file browser
    Reveal,
}
