use anyhow::Result as AnyhowResult;

use super::super::search_operations::search_similar;
use super::super::search_result::SemanticMatch;
use super::db::VectorDB;

impl VectorDB {
    pub async fn search_similar(
        &self,
        query: &str,
        limit: usize,
    ) -> AnyhowResult<Vec<SemanticMatch>> {
        search_similar(&self.categories_table, query, limit).await
    }
}
