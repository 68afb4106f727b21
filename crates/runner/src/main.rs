use accessgrid_rest::{AccessGridClient, AccessGridError};
use clap::{Parser, Subcommand};
use model::{CardState, EventLogFilters, ListCardsParams};
use serde_json::Value;
use std::process::ExitCode;
use tracing::{error, info};

/// AccessGrid command-line client
///
/// Reads ACCESSGRID_ACCOUNT_ID, ACCESSGRID_SECRET_KEY and the optional
/// ACCESSGRID_BASE_URL from the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "accessgrid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Show a key card
    Get { card_id: String },
    /// List key cards issued from a template
    List {
        template_id: String,
        /// Only cards in this state (active, suspended, unlinked, deleted)
        state: Option<CardState>,
    },
    /// Suspend a key card
    Suspend { card_id: String },
    /// Resume a suspended key card
    Resume { card_id: String },
    /// Unlink a key card from its device
    Unlink { card_id: String },
    /// Delete a key card
    Delete { card_id: String },
    /// Show a card template
    Template { template_id: String },
    /// Show event logs for a card template
    Logs {
        template_id: String,
        /// Only events from this device
        device: Option<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "get",
            Self::List { .. } => "list",
            Self::Suspend { .. } => "suspend",
            Self::Resume { .. } => "resume",
            Self::Unlink { .. } => "unlink",
            Self::Delete { .. } => "delete",
            Self::Template { .. } => "template",
            Self::Logs { .. } => "logs",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    common::init_logging();

    let client = match AccessGridClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to configure client");
            return ExitCode::FAILURE;
        }
    };

    info!(command = cli.command.name(), endpoint = %client.endpoint(), "Running command");

    match run(&client, cli.command).await {
        Ok(output) => {
            println!("{output:#}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, status = ?e.http_status(), "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &AccessGridClient, command: Command) -> Result<Value, AccessGridError> {
    let cards = &client.access_cards;

    match command {
        Command::Get { card_id } => to_json(cards.get(&card_id).await?),
        Command::Suspend { card_id } => to_json(cards.suspend(&card_id).await?),
        Command::Resume { card_id } => to_json(cards.resume(&card_id).await?),
        Command::Unlink { card_id } => to_json(cards.unlink(&card_id).await?),
        Command::Delete { card_id } => to_json(cards.delete(&card_id).await?),
        Command::List { template_id, state } => {
            let mut params = ListCardsParams::new(template_id);
            if let Some(state) = state {
                params = params.with_state(state);
            }
            to_json(cards.list(&params).await?)
        }
        Command::Template { template_id } => {
            to_json(client.console.read_template(&template_id).await?)
        }
        Command::Logs { template_id, device } => {
            let filters = EventLogFilters {
                device,
                ..Default::default()
            };
            let page = client.console.get_event_logs(&template_id, &filters).await?;
            to_json(page.logs)
        }
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value, AccessGridError> {
    serde_json::to_value(value).map_err(AccessGridError::wrap)
}
