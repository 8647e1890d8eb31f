use anyhow::Result;
use clap::{Parser, Subcommand};
use leme::commands::{export, menu, serve};
use leme::libs::config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive record-keeping console")]
    Menu,
    #[command(about = "Run the HTTP JSON API server")]
    Serve(serve::ServeArgs),
    #[command(about = "Export collections to JSON files")]
    Export(export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Menu => menu::cmd(&config),
        Commands::Serve(args) => serve::cmd(args, config).await,
        Commands::Export(args) => export::cmd(args, &config),
    }
}
