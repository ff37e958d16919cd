use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Cpm {
            total_cost,
            cpm,
            impressions,
        } => commands::handle_cpm(
            &cli,
            total_cost.as_deref(),
            cpm.as_deref(),
            impressions.as_deref(),
        ),
        Commands::Ctr {
            impressions,
            clicks,
        } => commands::handle_ctr(&cli, impressions.as_deref(), clicks.as_deref()),
        Commands::Check { text } => commands::handle_check(&cli, text),
        Commands::Session => commands::handle_session(&cli),
    }
}
