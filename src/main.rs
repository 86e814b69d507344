//! Swifty CLI binary entry point.

use std::io::IsTerminal;

use swifty::cli::errors::{format_error_help, ErrorReport};
use swifty::cli::render::RenderOptions;
use swifty::cli::{Cli, Commands, TokenCommands};
use swifty::client::TokenedClient;
use swifty::config::ClientConfig;
use swifty::error::SwiftyError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let searched = match &cli.command {
        Commands::User(args) => Some(args.login.trim().to_string()),
        Commands::Search(args) => Some(args.query.trim().to_string()),
        Commands::Token(_) => None,
    };
    let json = matches!(&cli.command, Commands::User(args) if args.json);

    if let Err(e) = run(cli).await {
        tracing::debug!(error = %e, category = ?e.category(), "command failed");
        let report = json
            .then(|| serde_json::to_string_pretty(&ErrorReport::from(&e)).ok())
            .flatten();
        match report {
            Some(report) => println!("{report}"),
            None => eprintln!("Error: {}", format_error_help(&e, searched.as_deref())),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), SwiftyError> {
    let client = TokenedClient::new(ClientConfig::from_env()?)?;
    let opts = RenderOptions {
        color: !cli.no_color && std::io::stdout().is_terminal(),
        now: chrono::Utc::now(),
    };

    match cli.command {
        Commands::User(args) => {
            swifty::cli::lookup::handle_user(&client, &args.login, args.json, opts).await
        }
        Commands::Search(args) => swifty::cli::lookup::handle_search(&client, &args.query).await,
        Commands::Token(token_args) => match token_args.command {
            TokenCommands::Info => swifty::cli::token::handle_info(&client).await,
            TokenCommands::Status => swifty::cli::token::handle_status(&client).await,
            TokenCommands::RefreshDemo(args) => {
                swifty::cli::token::handle_refresh_demo(&client, &args.login).await
            }
        },
    }
}
