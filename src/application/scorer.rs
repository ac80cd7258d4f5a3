// ============================================================
// Layer 2 — Validation-Set Scorer
// ============================================================
// Turns a labelled validation file into an accuracy and a
// confusion matrix using whatever Classifier it is given.
//
//   Step 1: Read raw lines                (Layer 4 - loader)
//   Step 2: Encode every line             (Layer 4 - encoder)
//   Step 3: Score examples one by one     (Classifier trait)
//   Step 4: Aggregate into an EvalReport  (Layer 3 - metrics)
//
// All lines are encoded before the first prediction, so a bad
// line at the end of the file fails the run before any model
// time is spent.
//
// Scoring is sequential and single-example: each call to
// predict() sees exactly one [CLS] ... [SEP] sequence.

use anyhow::Result;
use std::path::Path;

use crate::data::{
    encoder::{ExampleEncoder, OovPolicy},
    loader::{RawLine, ValidationLoader},
    vocabulary::Vocabulary,
};
use crate::domain::{
    error::EvalError,
    example::Example,
    metrics::{argmax, ConfusionMatrix, EvalReport},
    traits::{Classifier, TextTokenizer},
};

/// Log progress every this many scored examples
const PROGRESS_EVERY: usize = 1000;

/// What to do with a line that fails to parse or look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Abort the whole pass on the first bad line
    #[default]
    Strict,
    /// Log a warning, count the line as skipped, carry on
    SkipInvalid,
}

pub struct ValidationScorer<'a, T, C> {
    encoder:     ExampleEncoder<'a, T>,
    classifier:  C,
    num_labels:  usize,
    line_policy: LinePolicy,
}

impl<'a, T: TextTokenizer, C: Classifier> ValidationScorer<'a, T, C> {
    /// A strict scorer: unknown tokens and bad lines abort the run.
    /// The confusion matrix is sized by the vocabulary's topic table.
    pub fn new(vocab: &'a Vocabulary, tokenizer: T, classifier: C) -> Self {
        Self {
            encoder:     ExampleEncoder::new(vocab, tokenizer),
            classifier,
            num_labels:  vocab.num_labels(),
            line_policy: LinePolicy::Strict,
        }
    }

    pub fn with_oov_policy(mut self, oov: OovPolicy) -> Self {
        self.encoder = self.encoder.with_oov_policy(oov);
        self
    }

    pub fn with_line_policy(mut self, policy: LinePolicy) -> Self {
        self.line_policy = policy;
        self
    }

    /// Read, encode and score the file at `path`.
    pub fn eval_validation_set(&self, path: impl AsRef<Path>) -> Result<EvalReport> {
        let path  = path.as_ref();
        let lines = ValidationLoader::new(path).load_lines()?;

        let (examples, skipped) = self.encode_lines(&lines)?;
        tracing::info!("Encoded {} examples ({} skipped)", examples.len(), skipped);

        let mut report = self.score(&examples, &path.display().to_string())?;
        report.skipped = skipped;
        Ok(report)
    }

    /// Encode every line in order. Returns the examples and the
    /// number of lines dropped under LinePolicy::SkipInvalid.
    pub fn encode_lines(&self, lines: &[RawLine]) -> Result<(Vec<Example>, usize)> {
        let mut examples = Vec::with_capacity(lines.len());
        let mut skipped  = 0usize;

        for line in lines {
            match self.encoder.encode_line(&line.text, line.number) {
                Ok(example) => examples.push(example),
                Err(e) => {
                    let skippable = self.line_policy == LinePolicy::SkipInvalid
                        && e.downcast_ref::<EvalError>().is_some_and(EvalError::is_line_error);
                    if !skippable {
                        return Err(e);
                    }
                    tracing::warn!("Skipping: {}", e);
                    skipped += 1;
                }
            }
        }

        Ok((examples, skipped))
    }

    /// Score already-encoded examples. `source` only names the
    /// dataset in the EmptyDataset error.
    pub fn score(&self, examples: &[Example], source: &str) -> Result<EvalReport> {
        if examples.is_empty() {
            return Err(EvalError::EmptyDataset { path: source.to_string() }.into());
        }

        let mut confusion = ConfusionMatrix::new(self.num_labels);
        let mut correct   = 0usize;
        let mut total     = 0usize;

        for example in examples {
            let scores    = self.classifier.predict(&example.token_ids)?;
            let predicted = argmax(&scores).ok_or(EvalError::EmptyScores)?;

            confusion.record(predicted, example.label)?;
            if predicted == example.label {
                correct += 1;
            }
            total += 1;

            if total % PROGRESS_EVERY == 0 {
                tracing::debug!("Scored {}/{} examples", total, examples.len());
            }
        }

        Ok(EvalReport {
            accuracy: correct as f64 / total as f64,
            correct,
            total,
            confusion,
            skipped: 0,
        })
    }
}
