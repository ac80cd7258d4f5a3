// ============================================================
// Layer 3 — Example Domain Type
// ============================================================
// A single validation example after encoding:
//
//   "sports ||| the team won"
//        │
//        ▼
//   token_ids = [CLS, the, team, won, SEP]   label = 2
//
// The token ids are indices into the word table of the
// vocabulary, NOT tokenizer ids.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// An encoded (token index sequence, gold label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Vocabulary indices, framed as [CLS] ... [SEP]
    pub token_ids: Vec<u32>,

    /// Index of the gold topic in the label table
    pub label: usize,
}

impl Example {
    pub fn new(token_ids: Vec<u32>, label: usize) -> Self {
        Self { token_ids, label }
    }
}
