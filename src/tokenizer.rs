use std::path::Path;

use anyhow::{Result, anyhow, bail};
use tokenizers::tokenizer::{Tokenizer, TruncationParams};

use crate::dataset::TokenizedRecord;

/// A pretrained HuggingFace tokenizer with truncation fixed at load time.
#[derive(Debug)]
pub struct BatchTokenizer {
    inner: Tokenizer,
}

impl BatchTokenizer {
    /// Loads `<model_path>/tokenizer.json` and truncates every encoding to
    /// `max_seq_len` tokens.
    pub fn from_pretrained(model_path: &Path, max_seq_len: usize) -> Result<Self> {
        let tokenizer_file = model_path.join("tokenizer.json");
        if !tokenizer_file.exists() {
            bail!("no tokenizer found at '{}'", tokenizer_file.display());
        }
        let mut tokenizer = Tokenizer::from_file(&tokenizer_file).map_err(|err| {
            anyhow!(
                "failed to load tokenizer from '{}' - {err}",
                tokenizer_file.display()
            )
        })?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_seq_len,
                ..TruncationParams::default()
            }))
            .map_err(|err| anyhow!("failed to configure truncation - {err}"))?;
        Ok(Self { inner: tokenizer })
    }

    /// Encodes a batch of raw texts, returning ids plus attention and
    /// special-tokens masks per example, in input order.
    pub fn encode_batch(&self, texts: Vec<String>) -> Result<Vec<TokenizedRecord>> {
        let encodings = self
            .inner
            .encode_batch(texts, true)
            .map_err(|err| anyhow!("failed to encode batch - {err}"))?;
        Ok(encodings
            .into_iter()
            .map(|encoding| TokenizedRecord {
                input_ids: encoding.get_ids().to_vec(),
                attention_mask: encoding.get_attention_mask().to_vec(),
                special_tokens_mask: encoding.get_special_tokens_mask().to_vec(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tokenizer_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = BatchTokenizer::from_pretrained(dir.path(), 4096).unwrap_err();
        assert!(err.to_string().contains("tokenizer.json"));
    }
}
