use std::sync::Arc;

use anyhow::Result as AnyhowResult;
use arrow_array::{RecordBatch, RecordBatchIterator};
use arrow_schema::Schema;
use lancedb::{connect, Connection, Table};
use tracing::info;

use super::super::schema::CATEGORIES_SCHEMA;
use crate::catalog::Catalog;
use crate::constants::CATEGORIES_TABLE;

/// LanceDB-backed index of product-category embeddings.
pub struct VectorDB {
    #[allow(dead_code)]
    pub(crate) connection: Connection,
    pub(crate) categories_table: Table,
    pub(crate) categories_schema: Arc<Schema>,
}

impl VectorDB {
    /// Opens the index at `db_path`. With `with_init` and a catalog, the
    /// categories table is recreated and filled with embeddings of the
    /// catalog's unique last categories.
    pub async fn new(
        db_path: &str,
        catalog: Option<&Catalog>,
        with_init: bool,
    ) -> AnyhowResult<Self> {
        let connection = connect(db_path).execute().await?;
        Self::new_with_connection(connection, catalog, with_init).await
    }

    pub async fn new_with_connection(
        connection: Connection,
        catalog: Option<&Catalog>,
        with_init: bool,
    ) -> AnyhowResult<Self> {
        let categories_table = if with_init && catalog.is_some() {
            info!("Creating new categories table");
            let _ = connection.drop_table(CATEGORIES_TABLE).await;

            let empty_batch = RecordBatch::new_empty(Arc::new(CATEGORIES_SCHEMA.clone()));
            let batch_iterator = RecordBatchIterator::new(
                vec![Ok(empty_batch)],
                Arc::new(CATEGORIES_SCHEMA.clone()),
            );
            let table = connection
                .create_table(CATEGORIES_TABLE, Box::new(batch_iterator))
                .execute()
                .await?;

            let db = Self {
                connection: connection.clone(),
                categories_table: table,
                categories_schema: Arc::new(CATEGORIES_SCHEMA.clone()),
            };

            if let Some(catalog) = catalog {
                let entries = catalog.unique_last_categories();
                info!("Indexing {} unique categories", entries.len());
                db.add_categories(&entries).await?;
            }

            db.categories_table
        } else {
            match connection.open_table(CATEGORIES_TABLE).execute().await {
                Ok(table) => table,
                Err(_) => {
                    return Err(anyhow::anyhow!(
                        "Table '{}' not found. Please initialize the index first using --reload",
                        CATEGORIES_TABLE
                    ));
                }
            }
        };

        Ok(Self {
            connection,
            categories_table,
            categories_schema: Arc::new(CATEGORIES_SCHEMA.clone()),
        })
    }
}
