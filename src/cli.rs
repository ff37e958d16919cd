use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adops", version, about = "AdOps metrics CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve the missing metric among total cost, CPM, and impressions
    Cpm {
        #[arg(long, allow_hyphen_values = true, help = "Total spend, e.g. 100 or 99.50")]
        total_cost: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Cost per thousand impressions")]
        cpm: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Ad-view count")]
        impressions: Option<String>,
    },
    /// Compute click-through rate from impressions and clicks
    Ctr {
        #[arg(long, allow_hyphen_values = true, help = "Ad-view count")]
        impressions: Option<String>,
        #[arg(long, allow_hyphen_values = true, help = "Click count")]
        clicks: Option<String>,
    },
    /// Check a text value against the numeric-entry guard
    Check {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Interactive calculator session holding both metric groups
    Session,
}
