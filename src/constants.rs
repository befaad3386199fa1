pub const MODEL_PATH: &str = "models/multilingual-MiniLM";
pub const CONFIG_PATH: &str = "matcher.yaml";

/// BERT embedding width.
pub const VECTOR_SIZE: i32 = 384;

pub const CATEGORIES_TABLE: &str = "categories";
