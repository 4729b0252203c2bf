use clap::{Parser, Subcommand};
use std::process::ExitCode;

use helpdesk::commands::{
    cmd_board, cmd_create, cmd_ls, cmd_move, cmd_show, cmd_stats, cmd_status,
};
use helpdesk::types::{TicketStatus, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Helpdesk ticket triage client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title (3-200 characters)
        title: String,

        /// Problem description (10-1000 characters)
        #[arg(short, long)]
        description: String,

        /// Contact email or phone number
        #[arg(short, long)]
        contact: String,
    },

    /// List tickets, most recently updated first
    Ls {
        /// Only show these statuses (repeatable)
        #[arg(short, long = "status", value_parser = parse_status)]
        status: Vec<TicketStatus>,

        /// Title search text
        #[arg(long)]
        search: Option<String>,
    },

    /// Display a single ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket id
        id: u64,
    },

    /// Set ticket status
    Status {
        /// Ticket id
        id: u64,

        /// New status (pending, accepted, resolved, rejected)
        #[arg(value_parser = parse_status)]
        status: TicketStatus,
    },

    /// Move a ticket by picking from the valid target statuses
    Move {
        /// Ticket id
        id: u64,

        /// Choice number from the presented list
        choice: Option<usize>,
    },

    /// Show the status board
    Board,

    /// Show per-status ticket counts
    Stats,
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            title,
            description,
            contact,
        } => cmd_create(&title, &description, &contact).await,
        Commands::Ls { status, search } => cmd_ls(&status, search.as_deref()).await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Status { id, status } => cmd_status(id, status).await,
        Commands::Move { id, choice } => cmd_move(id, choice).await,
        Commands::Board => cmd_board().await,
        Commands::Stats => cmd_stats().await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
