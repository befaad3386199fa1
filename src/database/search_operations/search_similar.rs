use anyhow::{Context, Result as AnyhowResult};
use futures::StreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::{DistanceType, Table};
use tracing::debug;

use super::process_search_batch::process_search_batch;
use crate::candle::get_embeddings::get_embeddings;
use crate::database::search_result::SemanticMatch;
use crate::preprocessing::format_query;

pub(crate) async fn search_similar(
    categories_table: &Table,
    query: &str,
    limit: usize,
) -> AnyhowResult<Vec<SemanticMatch>> {
    let formatted = format_query(query);
    debug!("Semantic search for '{}' (formatted: '{}')", query, formatted);

    let query_embedding = get_embeddings(&formatted).await?;
    let mut results = categories_table
        .vector_search(query_embedding)
        .context("Failed to create vector search")?
        .distance_type(DistanceType::Cosine)
        .limit(limit)
        .execute()
        .await?;

    let mut matches = Vec::new();
    while let Some(Ok(rb)) = results.next().await {
        matches.extend(process_search_batch(rb)?);
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(matches)
}
