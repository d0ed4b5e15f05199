pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recipefinder")]
#[command(about = "RecipeFinder - aggregated recipe search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes across all configured providers
    Search {
        /// Comma-separated ingredients you have (e.g. "chicken,rice")
        #[arg(long)]
        have: Option<String>,

        /// Comma-separated ingredients to avoid
        #[arg(long)]
        exclude: Option<String>,

        /// Free-text keyword
        #[arg(long)]
        keyword: Option<String>,

        /// Ranking strategy: best-match or fewest-missing
        #[arg(long, default_value = "best-match")]
        strategy: String,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show full details for one recipe by composite id
    Details {
        /// Composite recipe id, e.g. "mealdb:52795"
        id: String,
    },
}
