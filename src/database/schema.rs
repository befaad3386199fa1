use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

use crate::constants::VECTOR_SIZE;

lazy_static::lazy_static! {
    pub(crate) static ref CATEGORIES_SCHEMA: Schema = Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("category", DataType::Utf8, false),
        Field::new("path", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(
                Arc::new(Field::new("item", DataType::Float32, true)),
                VECTOR_SIZE,
            ),
            false,
        ),
    ]);
}
