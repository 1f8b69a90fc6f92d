//! # Lore CLI
//!
//! Drives the College of Lore page components from a terminal: submit the
//! login form against a live server, toggle the persisted theme, and step
//! through a slideshow.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod config;
mod handlers;
mod page;
mod state;
mod telemetry;

use config::AppConfig;
use lore_core::domain::Endpoint;
use state::AppState;
use telemetry::TelemetryConfig;

#[derive(Debug, Parser)]
#[command(name = "lore", version, about = "College of Lore page client")]
struct Cli {
    /// Server origin the form posts to [env: LORE_ORIGIN]
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Seconds before a submission gives up [env: LORE_REQUEST_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// File holding persisted preferences [env: LORE_STORAGE_PATH]
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in through the login form
    Login(CredentialArgs),
    /// Create an account through the login form
    Register(CredentialArgs),
    /// Submit the login form as if triggered by an arbitrary control
    Submit {
        /// Id of the submitting control; omit for a submission with no submitter
        #[arg(long)]
        submitter: Option<String>,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Inspect or toggle the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Step through a slideshow
    Slides {
        /// Number of slides in the gallery
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// Steps to advance by, in order; negative steps go back
        #[arg(allow_negative_numbers = true)]
        steps: Vec<i64>,
        /// Click the image on the final slide
        #[arg(long)]
        zoom: bool,
    },
}

#[derive(Debug, Args)]
struct CredentialArgs {
    /// Value for the user name field
    #[arg(long, short)]
    user: String,
    /// Value for the password field
    #[arg(long, env = "LORE_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    /// Print the theme a fresh page load applies
    Show,
    /// Switch between default and light
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let cli = Cli::parse();

    let config = AppConfig::from_env()?.with_overrides(
        cli.origin.as_deref(),
        cli.timeout_secs,
        cli.storage,
    )?;

    tracing::debug!(
        origin = %config.origin,
        timeout = ?config.request_timeout,
        "Configuration loaded"
    );

    let state = AppState::new(config)?;

    let output = match cli.command {
        Command::Login(creds) => {
            handlers::auth::submit(
                &state,
                Some(Endpoint::SIGN_IN_BUTTON),
                &creds.user,
                &creds.password,
            )
            .await?
        }
        Command::Register(creds) => {
            handlers::auth::submit(
                &state,
                Some(Endpoint::REGISTER_BUTTON),
                &creds.user,
                &creds.password,
            )
            .await?
        }
        Command::Submit {
            submitter,
            credentials,
        } => {
            handlers::auth::submit(
                &state,
                submitter.as_deref(),
                &credentials.user,
                &credentials.password,
            )
            .await?
        }
        Command::Theme { action } => match action {
            ThemeAction::Show => handlers::theme::show(&state).await?,
            ThemeAction::Toggle => handlers::theme::toggle(&state).await?,
        },
        Command::Slides { count, steps, zoom } => handlers::slides::run(count, &steps, zoom).await?,
    };

    println!("{}", output);
    Ok(())
}
