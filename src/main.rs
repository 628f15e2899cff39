//! Sonar - a command line client for the OpenRadar bug tracker

use anyhow::Context;
use clap::{Parser, Subcommand};

use sonar::api::auth;
use sonar::config::Config;
use sonar::{logging, BugTracker, OpenRadar};

#[derive(Parser)]
#[command(name = "sonar", version, about = "OpenRadar bug tracker client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a radar by its numeric ID and print its fields
    Fetch {
        /// The radar ID
        id: i64,
    },
    /// Manage the stored API token
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the tracker base URL
    SetUrl {
        /// The new base URL
        url: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Store an API token in the OS keyring
    Set {
        /// The token value
        token: String,
    },
    /// Show whether a token is stored
    Status,
    /// Remove the stored token
    Delete,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Fetch { id } => fetch(id).await,
        Command::Auth { action } => run_auth(action),
        Command::Config { action } => run_config(action),
    };

    logging::shutdown();
    outcome
}

async fn fetch(id: i64) -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    // Fetching works without authentication; use the stored token when
    // one exists.
    let token = auth::get_token().unwrap_or_default();
    let tracker = OpenRadar::with_base_url(&token, &config.tracker_url)?;

    let radar = tracker.fetch(id).await?;

    println!("{}", radar);
    println!();
    println!("Classification:  {}", radar.classification);
    println!("Product:         {}", radar.product);
    println!("Reproducibility: {}", radar.reproducibility);
    println!("Version:         {}", radar.version);

    print_section("Summary", &radar.description);
    print_section("Steps to Reproduce", &radar.steps);
    print_section("Expected Results", &radar.expected);
    print_section("Actual Results", &radar.actual);
    print_section("Configuration", &radar.configuration);
    print_section("Notes", &radar.notes);

    Ok(())
}

fn print_section(title: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    println!();
    println!("{}:", title);
    println!("{}", body);
}

fn run_config(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("tracker_url = {}", config.tracker_url);
        }
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.tracker_url = url;
            config.save()?;
            println!("Configuration saved.");
        }
    }
    Ok(())
}

fn run_auth(action: AuthAction) -> anyhow::Result<()> {
    match action {
        AuthAction::Set { token } => {
            auth::store_token(&token)?;
            println!("Token stored.");
        }
        AuthAction::Status => {
            if auth::has_token() {
                println!("A token is stored.");
            } else {
                println!("No token stored.");
            }
        }
        AuthAction::Delete => {
            auth::delete_token()?;
            println!("Token deleted.");
        }
    }
    Ok(())
}
