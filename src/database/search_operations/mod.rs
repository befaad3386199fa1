mod process_search_batch;
mod search_similar;

pub(crate) use search_similar::search_similar;
