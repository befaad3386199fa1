mod batch;
mod candle;
mod catalog;
mod cli;
mod config;
mod constants;
mod database;
mod preprocessing;
mod scoring;

#[cfg(test)]
mod tests;

pub use batch::report::{default_report_path, CsvReport, MatchStrategy, ReportRow};
pub use batch::runner::{run_batch, BatchError, BatchSummary};
pub use batch::table::display_csv_as_table;
pub use catalog::{Catalog, LocalizedName, ProductDocument, StringList, TextMatch};
pub use cli::{parse_args, Args};
pub use config::Config;
pub use constants::*;
pub use database::{SemanticMatch, VectorDB};
pub use preprocessing::format_query;
pub use scoring::compute_fuzzy_score;
