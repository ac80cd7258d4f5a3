// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Two read-only lookup tables shared by the whole evaluation:
//
//   w2i: word  → index into the model's embedding table
//   t2i: topic → class index (row/column of the confusion matrix)
//
// The tables are built by the training side and stored as JSON:
//
//   {
//     "w2i": { "[PAD]": 0, "[CLS]": 1, "[SEP]": 2, "the": 3, ... },
//     "t2i": { "sports": 0, "music": 1, ... }
//   }
//
// A Vocabulary is constructed once and passed by reference to
// the encoder — there is no global instance.
//
// Reference: Rust Book §8 (Hash Maps)
//            serde_json crate documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::error::EvalError;

/// Sequence start marker, prepended to every example
pub const CLS_TOKEN: &str = "[CLS]";

/// Separator marker, appended to every example
pub const SEP_TOKEN: &str = "[SEP]";

/// On-disk layout of the vocabulary file
#[derive(Debug, Serialize, Deserialize)]
struct VocabularyFile {
    w2i: HashMap<String, u32>,
    t2i: HashMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    w2i:     HashMap<String, u32>,
    t2i:     HashMap<String, usize>,
    cls_idx: u32,
    sep_idx: u32,
}

impl Vocabulary {
    /// Build a vocabulary from its two tables.
    /// Fails if [CLS] or [SEP] has no word index.
    pub fn new(
        w2i: HashMap<String, u32>,
        t2i: HashMap<String, usize>,
    ) -> Result<Self, EvalError> {
        let reserved = |tok: &str| {
            w2i.get(tok)
                .copied()
                .ok_or_else(|| EvalError::MissingSpecialToken(tok.to_string()))
        };
        let cls_idx = reserved(CLS_TOKEN)?;
        let sep_idx = reserved(SEP_TOKEN)?;
        Ok(Self { w2i, t2i, cls_idx, sep_idx })
    }

    /// Load the JSON vocabulary file written at training time
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read vocabulary '{}'", path.display()))?;
        let file: VocabularyFile = serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary '{}'", path.display()))?;

        let vocab = Self::new(file.w2i, file.t2i)?;
        tracing::info!(
            "Vocabulary loaded: {} words, {} topics",
            vocab.num_words(),
            vocab.num_labels()
        );
        Ok(vocab)
    }

    pub fn word_index(&self, word: &str) -> Option<u32> {
        self.w2i.get(word).copied()
    }

    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.t2i.get(label).copied()
    }

    pub fn cls_index(&self) -> u32 {
        self.cls_idx
    }

    pub fn sep_index(&self) -> u32 {
        self.sep_idx
    }

    /// Size of the word table — the model's embedding rows
    pub fn num_words(&self) -> usize {
        self.w2i.len()
    }

    /// Size of the topic table — the confusion matrix side
    pub fn num_labels(&self) -> usize {
        self.t2i.len()
    }
}
