// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the WordPiece tokenizer saved at training time
// (HuggingFace tokenizer.json) and adapts it to the domain's
// TextTokenizer trait.
//
// Only the token *strings* are used: indices come from the
// vocabulary's word table, not from the tokenizer's own ids,
// and no special tokens are added here ([CLS]/[SEP] framing is
// the encoder's job).
//
// Reference: Wu et al. (2016) WordPiece
//            tokenizers crate documentation

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::domain::traits::TextTokenizer;

pub struct WordPieceTokenizer {
    inner: Tokenizer,
}

impl WordPieceTokenizer {
    /// Load a previously saved tokenizer from its JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;
        tracing::info!("Tokenizer loaded from '{}'", path.display());
        Ok(Self { inner })
    }
}

impl TextTokenizer for WordPieceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let enc = self
            .inner
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;
        Ok(enc.get_tokens().to_vec())
    }
}
