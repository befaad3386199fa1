use std::path::Path;

use anyhow::Result as AnyhowResult;
use candle_core::Device;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config, DTYPE};
use tokenizers::{PaddingParams, Tokenizer};

/// Loads the sentence-embedding model from a local directory holding
/// `config.json`, `tokenizer.json` and `model.ot`.
pub fn load_model(model_path: &Path) -> AnyhowResult<(BertModel, Tokenizer)> {
    let config_path = model_path.join("config.json");
    let tokenizer_path = model_path.join("tokenizer.json");
    let weights_path = model_path.join("model.ot");

    for (label, path) in [
        ("config", &config_path),
        ("tokenizer", &tokenizer_path),
        ("weights", &weights_path),
    ] {
        if !path.exists() {
            return Err(anyhow::anyhow!("Model {} not found at {:?}", label, path));
        }
    }

    let config = std::fs::read_to_string(config_path)?;
    let config: Config = serde_json::from_str(&config)?;

    let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
        .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

    let vb = VarBuilder::from_pth(&weights_path, DTYPE, &Device::Cpu)?;
    let model = BertModel::load(vb, &config)?;

    if let Some(pp) = tokenizer.get_padding_mut() {
        pp.strategy = tokenizers::PaddingStrategy::BatchLongest;
    } else {
        let pp = PaddingParams {
            strategy: tokenizers::PaddingStrategy::BatchLongest,
            ..Default::default()
        };
        tokenizer.with_padding(Some(pp));
    }

    Ok((model, tokenizer))
}
