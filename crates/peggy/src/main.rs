use anyhow::Result;
use clap::{Parser, Subcommand};

use peggy::commands;

#[derive(Parser)]
#[command(name = "peggy")]
#[command(about = "Browse the Art Institute of Chicago catalog with cross-page row selection")]
struct Cli {
  /// Catalog API base URL (or use PEGGY_API_BASE env var)
  #[arg(long, env = "PEGGY_API_BASE")]
  api_base: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Browse pages interactively and build a cross-page selection
  Browse {
    /// Page to start on (1-based)
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    /// Rows per page
    #[arg(short, long, default_value_t = 10)]
    limit: u32,
  },
  /// Print a single page of the catalog and exit
  Page {
    /// Page number (1-based)
    number: u32,
    /// Rows per page
    #[arg(short, long, default_value_t = 10)]
    limit: u32,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Browse { page, limit } => commands::browse::handle(cli.api_base, page, limit).await,
    Commands::Page { number, limit } => commands::page::handle(cli.api_base, number, limit).await,
  }
}
