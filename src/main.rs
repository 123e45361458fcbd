use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;

mod api;
mod commands;
mod config;
mod feed;
mod telemetry;
mod terminal;

use config::ClientConfig;

#[derive(Parser)]
#[command(name = "blog", about = "Blog feed client")]
struct Cli {
    /// API root, e.g. http://localhost:8080/api (default: $BLOG_API_URL)
    #[arg(global = true, short, long)]
    base_url: Option<String>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Browse(terminal::browse::BrowseCmd),
    Ls(commands::ls::LsCmd),
    Create(commands::create::CreateCmd),
    Delete(commands::delete::DeleteCmd),
}

// single-threaded: the feed controller is driven from one event loop
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and BLOG_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = ClientConfig::from_env().with_base_url(cli.base_url);

    match cli.command {
        Commands::Browse(args) => terminal::browse::run(&cfg, args).await?,
        Commands::Ls(args) => commands::ls::run(&cfg, args).await?,
        Commands::Create(args) => commands::create::run(&cfg, args).await?,
        Commands::Delete(args) => commands::delete::run(&cfg, args).await?,
    }

    Ok(())
}
