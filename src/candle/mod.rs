pub mod get_embeddings;
pub mod load_model;

use std::path::Path;

use lazy_static::lazy_static;

use crate::candle::load_model::load_model;
use crate::constants::MODEL_PATH;

lazy_static! {
    pub(crate) static ref AI: (
        candle_transformers::models::bert::BertModel,
        tokenizers::Tokenizer
    ) = load_model(Path::new(MODEL_PATH)).expect("Unable to load model");
}
