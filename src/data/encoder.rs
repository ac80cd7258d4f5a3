// ============================================================
// Layer 4 — Example Encoder
// ============================================================
// Turns one raw validation line into a model-ready Example.
//
// Steps (applied in this exact order):
//   1. Lowercase and trim the line, split on " ||| "
//   2. Tokenize the body text
//   3. Look every token up in the word table
//   4. Append [SEP], prepend [CLS]
//   5. Look the label up in the topic table
//
//   "Sports ||| The team won"
//        │ 1
//        ▼
//   ("sports", "the team won")
//        │ 2, 3, 4
//        ▼
//   [CLS] the team won [SEP]  →  [1, 7, 42, 19, 2]
//        │ 5
//        ▼
//   Example { token_ids: [1, 7, 42, 19, 2], label: 2 }
//
// Lookups are strict: a missing token or label is an error.
// OovPolicy::Fallback relaxes this for body tokens only.
//
// Reference: Rust Book §8 (Strings), §9 (Error Handling)

use anyhow::Result;

use crate::data::vocabulary::Vocabulary;
use crate::domain::{error::EvalError, example::Example, traits::TextTokenizer};

/// Literal separator between label and body, spaces included
pub const DELIMITER: &str = " ||| ";

/// What to do with a body token that has no word index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OovPolicy {
    /// Fail the line with EvalError::UnknownToken
    Strict,
    /// Substitute this word index
    Fallback(u32),
}

impl OovPolicy {
    /// Strict when `unk_token` is None, otherwise fall back to
    /// that token's index, which must exist in the vocabulary.
    pub fn from_unk_token(vocab: &Vocabulary, unk_token: Option<&str>) -> Result<Self, EvalError> {
        match unk_token {
            None => Ok(OovPolicy::Strict),
            Some(tok) => vocab
                .word_index(tok)
                .map(OovPolicy::Fallback)
                .ok_or_else(|| EvalError::MissingSpecialToken(tok.to_string())),
        }
    }
}

/// Split a raw line into (label, body) after lowercasing and trimming.
pub fn split_line(raw: &str, line: usize) -> Result<(String, String), EvalError> {
    let normalised = raw.to_lowercase();
    let normalised = normalised.trim();

    let found = normalised.matches(DELIMITER).count();
    if found != 1 {
        return Err(EvalError::Format { line, found });
    }

    match normalised.split_once(DELIMITER) {
        Some((label, body)) => Ok((label.to_string(), body.to_string())),
        None => Err(EvalError::Format { line, found: 0 }),
    }
}

pub struct ExampleEncoder<'a, T> {
    vocab:     &'a Vocabulary,
    tokenizer: T,
    oov:       OovPolicy,
}

impl<'a, T: TextTokenizer> ExampleEncoder<'a, T> {
    /// Strict encoder: unknown tokens fail the line
    pub fn new(vocab: &'a Vocabulary, tokenizer: T) -> Self {
        Self { vocab, tokenizer, oov: OovPolicy::Strict }
    }

    pub fn with_oov_policy(mut self, oov: OovPolicy) -> Self {
        self.oov = oov;
        self
    }

    /// Encode one line. `line` is only used in error messages.
    pub fn encode_line(&self, raw: &str, line: usize) -> Result<Example> {
        let (label, body) = split_line(raw, line)?;

        let tokens = self.tokenizer.tokenize(&body)?;

        let mut token_ids = Vec::with_capacity(tokens.len() + 2);
        token_ids.push(self.vocab.cls_index());
        for token in tokens {
            let idx = match (self.vocab.word_index(&token), self.oov) {
                (Some(idx), _) => idx,
                (None, OovPolicy::Fallback(unk)) => {
                    tracing::debug!("line {}: '{}' mapped to fallback index", line, token);
                    unk
                }
                (None, OovPolicy::Strict) => {
                    return Err(EvalError::UnknownToken { line, token }.into());
                }
            };
            token_ids.push(idx);
        }
        token_ids.push(self.vocab.sep_index());

        let label_idx = self
            .vocab
            .label_index(&label)
            .ok_or(EvalError::UnknownLabel { line, label })?;

        Ok(Example::new(token_ids, label_idx))
    }
}
