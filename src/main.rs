use anyhow::Result;
use clap::{Parser, Subcommand};
use jobhub::config::AppConfig;
use jobhub::start_web_server;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobhub", about = "JobHub professional network API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobhub=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    let port = match cli.command {
        Some(Command::Serve { port }) => port,
        None => 8000,
    };

    let config = AppConfig::load()?;
    start_web_server(config, port).await
}
