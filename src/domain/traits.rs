// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The scorer depends on two collaborators it does not own:
//
//   TextTokenizer → splits body text into string tokens
//   Classifier    → turns a token index sequence into one
//                   score per class
//
// Programming against traits keeps the scoring loop free of
// burn and tokenizers types:
//   - WordPieceTokenizer implements TextTokenizer
//   - CnnClassifier implements Classifier
//   - tests implement both with tiny stubs
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── TextTokenizer ────────────────────────────────────────────────────────────
/// Anything that can split text into the string tokens used as
/// keys of the vocabulary word table.
pub trait TextTokenizer {
    /// Tokenize `text` without adding any special tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Anything that scores a single encoded example.
///
/// Implementations must be deterministic: the same sequence
/// always yields the same scores (no dropout, no sampling).
pub trait Classifier {
    /// Return one score per class for `token_ids`.
    /// Higher is better; scores need not be normalised.
    fn predict(&self, token_ids: &[u32]) -> Result<Vec<f32>>;
}

/// Blanket impl so a `&C` can be handed to code that takes `C: Classifier`.
impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, token_ids: &[u32]) -> Result<Vec<f32>> {
        (**self).predict(token_ids)
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        (**self).tokenize(text)
    }
}
