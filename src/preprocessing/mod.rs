pub mod format_query;

pub use format_query::{format_query, tokenize};
