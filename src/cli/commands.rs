use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "graintrack", about = "Soybean-import analytics backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,
    },
    /// Print the assembled import report as JSON
    Report {
        /// Query date (YYYY-MM-DD); defaults to the newest observation
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Print the month-level comparison series as JSON
    Comparison {
        /// Query date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Fetch snapshots from the configured vendor feed and store them
    Ingest,
}
