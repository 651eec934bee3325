use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "triagedesk")]
#[command(about = "Dashboard client for the incident-triage backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides config file and TRIAGEDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the backend and keep a rendered dashboard page up to date
    Watch {
        /// Output page path
        #[arg(long, default_value = "triagedesk.html")]
        out: PathBuf,

        /// Poll interval in seconds (overrides config)
        #[arg(long)]
        interval: Option<u64>,

        /// Location filter (`all` for no filter)
        #[arg(long, default_value = "all")]
        location: String,

        /// Status filter (`all` for no filter)
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Fetch and print the current message list
    List {
        #[arg(long, default_value = "all")]
        location: String,

        #[arg(long, default_value = "all")]
        status: String,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print the full detail view for one message
    Show {
        id: u64,
    },

    /// Submit a new emergency message for backend analysis
    Submit {
        text: String,
    },

    /// Assign a message to the responder team
    Assign {
        id: u64,
    },

    /// Mark a message as resolved
    Resolve {
        id: u64,
    },

    /// Print the urgency summary tiles
    Stats,
}
