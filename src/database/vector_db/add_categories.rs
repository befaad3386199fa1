use std::sync::Arc;

use anyhow::Result as AnyhowResult;
use arrow::datatypes::Float32Type;
use arrow_array::{FixedSizeListArray, RecordBatch, RecordBatchIterator, StringArray};
use tracing::{debug, warn};

use super::db::VectorDB;
use crate::candle::get_embeddings::get_embeddings;
use crate::constants::VECTOR_SIZE;

/// Index id for a category name: lowercase ASCII with underscores, Polish
/// diacritics folded, `&` spelled out. Returns an empty string for names
/// that leave nothing usable.
pub(crate) fn normalize_category_id(name: &str) -> String {
    let mut id = String::new();
    for c in name.chars().flat_map(char::to_lowercase) {
        match fold_diacritic(c) {
            ' ' => id.push('_'),
            '&' => id.push_str("and"),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => id.push(c),
            _ => {}
        }
    }
    id
}

fn fold_diacritic(c: char) -> char {
    match c {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' | 'ż' => 'z',
        _ => c,
    }
}

impl VectorDB {
    /// Embeds each (category, full path) entry and appends them to the
    /// categories table in one batch. Entries whose normalized id comes out
    /// empty are skipped, the index requires non-empty ids.
    pub(crate) async fn add_categories(&self, entries: &[(String, String)]) -> AnyhowResult<()> {
        let mut ids = Vec::new();
        let mut categories = Vec::new();
        let mut paths = Vec::new();
        let mut embeddings = Vec::new();

        for (category, path) in entries {
            let id = normalize_category_id(category);
            if id.is_empty() {
                warn!("Skipping category with empty id: '{}'", category);
                continue;
            }
            debug!("Embedding category '{}' ({})", category, path);
            let embedding = get_embeddings(path).await?;
            ids.push(id);
            categories.push(category.clone());
            paths.push(path.clone());
            embeddings.push(embedding);
        }

        if ids.is_empty() {
            warn!("No valid categories to index");
            return Ok(());
        }

        let id_array = Arc::new(StringArray::from(ids));
        let category_array = Arc::new(StringArray::from(categories));
        let path_array = Arc::new(StringArray::from(paths));
        let vector_array = Arc::new(
            FixedSizeListArray::from_iter_primitive::<Float32Type, _, _>(
                embeddings
                    .iter()
                    .map(|vec| Some(vec.iter().copied().map(Some).collect::<Vec<_>>())),
                VECTOR_SIZE,
            ),
        );

        let batch = RecordBatch::try_new(
            self.categories_schema.clone(),
            vec![id_array, category_array, path_array, vector_array],
        )?;
        let batch_iterator =
            RecordBatchIterator::new(vec![Ok(batch)], self.categories_schema.clone());
        self.categories_table
            .add(Box::new(batch_iterator))
            .execute()
            .await?;

        Ok(())
    }
}
