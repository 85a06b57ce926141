use chrono::NaiveDate;
use clap::Parser;
use graintrack::cli::commands::{Cli, Commands};
use graintrack::infrastructure::feeds::vendor::VendorFeed;
use graintrack::infrastructure::feeds::Feed;
use graintrack::server;
use graintrack::GrainTrack;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("GRAINTRACK_DB").unwrap_or_else(|_| "./graintrack.db".into());

    let service = match GrainTrack::new(&db_path) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error initializing graintrack: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(service, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    service: GrainTrack,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { addr } => {
            let addr: SocketAddr = addr.parse()?;
            server::run_server(addr, service).await?;
        }
        Commands::Report { as_of } => {
            let report = service.report(parse_date(as_of.as_deref())?)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Comparison { as_of } => {
            let points = service.monthly_comparison(parse_date(as_of.as_deref())?);
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Commands::Ingest => {
            let feed: Arc<dyn Feed> = Arc::new(VendorFeed::from_env()?);
            let results = service.ingest(&[feed]).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }
    Ok(())
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    raw.map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d")).transpose()
}
