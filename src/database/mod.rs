mod schema;
mod search_operations;
mod search_result;
mod vector_db;

pub use search_result::SemanticMatch;
pub use vector_db::VectorDB;
