use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::constants::CONFIG_PATH;

#[derive(Parser)]
#[command(
    name = "product-matcher",
    about = "Match product-name queries against a catalog",
    long_about = "Matches free-text product names against a catalog snapshot using direct text \
                  search, fuzzy rescoring and semantic category search. Provide a batch file \
                  with --input, a single --query, or --reload to rebuild the vector index.",
    version
)]
pub struct Args {
    /// Batch file: one product-name query per line
    #[arg(
        short,
        long,
        help = "Newline-delimited batch file of product-name queries",
        required_unless_present_any = ["query", "reload"]
    )]
    pub input: Option<PathBuf>,

    /// Where to write the CSV report
    #[arg(
        short,
        long,
        help = "Report path (defaults to a timestamped file next to the working directory)"
    )]
    pub output: Option<PathBuf>,

    /// A single query to match interactively
    #[arg(
        short,
        long,
        help = "Match one query and print all result sets",
        conflicts_with = "input"
    )]
    pub query: Option<String>,

    /// Rebuild the category vector index from the catalog
    #[arg(
        long,
        help = "Rebuild the category vector index before anything else",
        default_value = "false"
    )]
    pub reload: bool,

    /// Semantic search result count
    #[arg(long, help = "How many semantic category matches to return", default_value_t = 10)]
    pub top_k: usize,

    /// Config file path
    #[arg(short, long, help = "YAML config path", default_value = CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable debug output
    #[arg(long, help = "Enable debug logging", action = ArgAction::SetTrue)]
    pub debug: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
