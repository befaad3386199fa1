use anyhow::Result as AnyhowResult;
use arrow_array::RecordBatch;

use crate::database::search_result::SemanticMatch;

pub(crate) fn process_search_batch(batch: RecordBatch) -> AnyhowResult<Vec<SemanticMatch>> {
    let id_array = string_column(&batch, "id")?;
    let category_array = string_column(&batch, "category")?;
    let path_array = string_column(&batch, "path")?;

    let distance_array = batch
        .column_by_name("_distance")
        .ok_or_else(|| anyhow::anyhow!("Missing _distance column"))?
        .as_any()
        .downcast_ref::<arrow::array::Float32Array>()
        .ok_or_else(|| anyhow::anyhow!("Failed to get _distance as float"))?
        .clone();

    let mut matches = Vec::with_capacity(batch.num_rows());
    for row_idx in 0..batch.num_rows() {
        let distance = distance_array.value(row_idx);
        matches.push(SemanticMatch {
            id: id_array.value(row_idx).to_string(),
            category: category_array.value(row_idx).to_string(),
            path: path_array.value(row_idx).to_string(),
            similarity: 1.0 - distance,
        });
    }

    Ok(matches)
}

fn string_column(batch: &RecordBatch, name: &str) -> AnyhowResult<arrow::array::StringArray> {
    Ok(batch
        .column_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("Missing {} column", name))?
        .as_any()
        .downcast_ref::<arrow::array::StringArray>()
        .ok_or_else(|| anyhow::anyhow!("Failed to get {} as string", name))?
        .clone())
}
