use std::path::{Path, PathBuf};

use anyhow::Result as AnyhowResult;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::report::{CsvReport, ReportRow};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::preprocessing::format_query;
use crate::scoring::compute_fuzzy_score;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Batch input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("Batch input file has no queries: {0}")]
    EmptyBatch(PathBuf),
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub queries: usize,
    pub direct_hits: usize,
    pub fuzzy_hits: usize,
}

/// Runs the batch matcher: one direct-search row and one fuzzy-rescored row
/// per non-empty input line, appended to `output` in input order.
///
/// A query without hits still gets its two rows (empty name and id, zero
/// score) so the report shape stays two rows per query; only report I/O
/// aborts the batch. An input without a single query still produces the
/// header-only report before the run is failed.
pub fn run_batch(
    catalog: &Catalog,
    config: &Config,
    input: &Path,
    output: &Path,
) -> AnyhowResult<BatchSummary> {
    if !input.exists() {
        return Err(BatchError::MissingInput(input.to_path_buf()).into());
    }
    let content = std::fs::read_to_string(input)?;
    let queries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut report = CsvReport::create(output)?;
    if queries.is_empty() {
        report.finish()?;
        warn!("No queries found in {}", input.display());
        return Err(BatchError::EmptyBatch(input.to_path_buf()).into());
    }

    info!(
        "Matching {} queries against {} catalog documents",
        queries.len(),
        catalog.len()
    );

    let mut summary = BatchSummary::default();
    for (i, query) in queries.iter().enumerate() {
        let sequence = i + 1;
        let formatted = format_query(query);
        debug!("Query {}: '{}' -> '{}'", sequence, query, formatted);

        let candidates = catalog.text_search(&formatted, config.search_limit);

        let direct = match candidates.first() {
            Some(hit) => {
                summary.direct_hits += 1;
                let document = catalog.document(hit.index);
                ReportRow {
                    given_name: document.given_name(),
                    score: hit.score,
                    id: document.id.clone(),
                }
            }
            None => {
                warn!("No direct match for query {}: '{}'", sequence, query);
                ReportRow::default()
            }
        };

        // fuzzy rescoring runs over the direct candidates, not the whole
        // catalog, mirroring the original two-stage lookup
        let mut rescored: Vec<(usize, f32)> = candidates
            .iter()
            .map(|hit| (hit.index, compute_fuzzy_score(query, catalog.document(hit.index))))
            .collect();
        rescored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let fuzzy = match rescored.first() {
            Some((index, score)) => {
                summary.fuzzy_hits += 1;
                let document = catalog.document(*index);
                ReportRow {
                    given_name: document.given_name(),
                    score: *score,
                    id: document.id.clone(),
                }
            }
            None => ReportRow::default(),
        };

        report.write_pair(sequence, query, &direct, &fuzzy)?;
    }

    summary.queries = report.finish()?;
    info!(
        "Batch finished: {} queries, {} direct hits, {} fuzzy hits",
        summary.queries, summary.direct_hits, summary.fuzzy_hits
    );
    Ok(summary)
}
