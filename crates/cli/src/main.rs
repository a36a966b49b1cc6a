//! Commons Market CLI - browse fixtures, replay carts and run mock checkouts.
//!
//! # Usage
//!
//! ```bash
//! # Show the community offers board
//! cm-cli offers
//! cm-cli offers --status open
//!
//! # List events
//! cm-cli events --format in-person
//!
//! # Community headline numbers
//! cm-cli stats
//!
//! # Replay a cart script and show totals
//! cm-cli cart replay cart.yaml --user 42
//!
//! # Replay, then check out against the fixture catalog
//! cm-cli checkout cart.yaml --session cs_test_1 --intent pi_test_1
//! ```
//!
//! # Commands
//!
//! - `offers` - Render the offers board
//! - `events` - Render the events list
//! - `stats` - Community stats
//! - `cart replay` - Apply a YAML action script to a cart
//! - `checkout` - Replay a script, place and settle an order

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commons_market_core::{EventFormat, OfferStatus, UserId};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "cm-cli")]
#[command(author, version, about = "Commons Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the community offers board
    Offers {
        /// Only show offers with this status (`open`, `in-progress`, `completed`)
        #[arg(short, long)]
        status: Option<OfferStatus>,
    },
    /// List community events
    Events {
        /// Only show events of this format (`virtual`, `in-person`)
        #[arg(short, long)]
        format: Option<EventFormat>,
    },
    /// Show community stats
    Stats,
    /// Work with carts
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Replay a cart script and check out against the fixture catalog
    Checkout {
        /// YAML file of cart actions
        script: PathBuf,

        /// Payment processor checkout session ID
        #[arg(long)]
        session: String,

        /// Payment processor payment intent ID
        #[arg(long)]
        intent: String,

        /// Buyer user ID
        #[arg(short, long, default_value_t = UserId::new(1))]
        user: UserId,

        /// Simulate a declined payment
        #[arg(long)]
        decline: bool,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Apply a YAML action script to an empty cart
    Replay {
        /// YAML file of cart actions
        script: PathBuf,

        /// Cart owner user ID
        #[arg(short, long, default_value_t = UserId::new(1))]
        user: UserId,

        /// Print the stored cart document as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

/// Install the global tracing subscriber. Logs go to stderr.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::from_env();
    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::default(), |config| config.log_format),
    );

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Offers { status } => commands::community::offers(status)?,
        Commands::Events { format } => commands::community::events(format)?,
        Commands::Stats => commands::community::stats()?,
        Commands::Cart { action } => match action {
            CartCommand::Replay { script, user, json } => {
                commands::cart::replay(&script, user, json, config).await?;
            }
        },
        Commands::Checkout {
            script,
            session,
            intent,
            user,
            decline,
        } => {
            let args = commands::checkout::CheckoutArgs {
                script: &script,
                user_id: user,
                session_id: session,
                payment_intent_id: intent,
                decline,
            };
            commands::checkout::run(args, config).await?;
        }
    }
    Ok(())
}
