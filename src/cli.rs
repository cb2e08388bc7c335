use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docmatch",
    about = "In-memory relevance search with contextual match snippets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a corpus file against a query
    Search {
        /// Path to a JSON array of documents
        #[arg(short, long)]
        input: String,

        /// Free-text query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Skip the content field when matching
        #[arg(long)]
        no_content: bool,

        /// Skip title and description when matching
        #[arg(long)]
        no_metadata: bool,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Summarize a corpus file
    Inspect {
        /// Path to a JSON array of documents
        #[arg(short, long)]
        input: String,
    },
}
