//! CLI entry point for Swifty.

pub mod errors;
pub mod lookup;
pub mod render;
pub mod token;

use clap::{Parser, Subcommand};

/// Swifty: look up 42 intranet profiles
#[derive(Parser, Debug)]
#[command(name = "swifty", version, about = "Swifty: 42 profile lookup CLI")]
pub struct Cli {
    /// Disable ANSI colours in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full profile of a login
    User(UserArgs),
    /// List logins matching a search string
    Search(SearchArgs),
    /// Inspect or exercise the cached access token
    Token(TokenArgs),
}

/// Arguments for `swifty user`.
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Login to look up (e.g. mmourdal)
    pub login: String,

    /// Print the raw profile as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `swifty search`.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search string matched against logins
    pub query: String,
}

/// Arguments for the `token` subcommand group.
#[derive(Parser, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommands,
}

/// Token subcommands.
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Ask the authorization server about the current token
    Info,
    /// Acquire a token and show the local cache state
    Status,
    /// Force expiry, then fetch a user to show the transparent refresh
    RefreshDemo(RefreshDemoArgs),
}

/// Arguments for `swifty token refresh-demo`.
#[derive(Parser, Debug)]
pub struct RefreshDemoArgs {
    /// Login fetched after the token is expired
    #[arg(default_value = "mmourdal")]
    pub login: String,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
