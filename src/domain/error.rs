// ============================================================
// Layer 3 — Evaluation Errors
// ============================================================
// Every way an evaluation pass can fail on its *input* (as
// opposed to plain I/O, which is reported through anyhow with
// file context).
//
// These are raised through anyhow::Result so callers that care
// can recover the variant with `err.downcast_ref::<EvalError>()`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The line does not contain the " ||| " delimiter exactly once
    #[error("line {line}: expected exactly one ' ||| ' delimiter, found {found}")]
    Format { line: usize, found: usize },

    #[error("line {line}: token '{token}' is not in the vocabulary")]
    UnknownToken { line: usize, token: String },

    #[error("line {line}: label '{label}' is not in the topic table")]
    UnknownLabel { line: usize, label: String },

    /// A reserved token ([CLS], [SEP] or the fallback token) has no index
    #[error("vocabulary has no entry for reserved token '{0}'")]
    MissingSpecialToken(String),

    /// Nothing was scored, so accuracy is undefined
    #[error("validation set '{path}' produced no examples")]
    EmptyDataset { path: String },

    #[error("classifier returned an empty score vector")]
    EmptyScores,

    #[error("class index out of range: predicted {predicted}, gold {gold}, {num_labels} labels")]
    ClassOutOfRange {
        predicted:  usize,
        gold:       usize,
        num_labels: usize,
    },
}

impl EvalError {
    /// True for per-line input problems that the lenient
    /// line policy is allowed to skip.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            EvalError::Format { .. }
                | EvalError::UnknownToken { .. }
                | EvalError::UnknownLabel { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_errors_are_skippable() {
        assert!(EvalError::Format { line: 1, found: 0 }.is_line_error());
        assert!(EvalError::UnknownLabel { line: 1, label: "x".into() }.is_line_error());
        assert!(!EvalError::EmptyDataset { path: "v.txt".into() }.is_line_error());
        assert!(!EvalError::EmptyScores.is_line_error());
    }

    #[test]
    fn test_format_message_names_line() {
        let msg = EvalError::Format { line: 7, found: 2 }.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("found 2"));
    }
}
