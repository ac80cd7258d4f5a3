// ============================================================
// Layer 2 — EvalUseCase
// ============================================================
// Orchestrates one evaluation of a trained checkpoint:
//
//   Step 1: Load vocabulary              (Layer 4 - data)
//   Step 2: Load tokenizer               (Layer 6 - infra)
//   Step 3: Rebuild model + load weights (Layer 5/6 - ml, infra)
//   Step 4: Score the validation file    (Layer 2 - scorer)
//   Step 5: Append to the results file   (Layer 6 - infra)
//
// Printing is left to the CLI layer.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Inference)

use anyhow::Result;
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::application::scorer::{LinePolicy, ValidationScorer};
use crate::data::{encoder::OovPolicy, vocabulary::Vocabulary};
use crate::domain::metrics::EvalReport;
use crate::infra::{
    checkpoint::CheckpointLoader,
    results::ResultsWriter,
    tokenizer_store::WordPieceTokenizer,
};
use crate::ml::{
    classifier::{CnnClassifier, DeviceKind},
    model::TopicCnnConfig,
};

type InferBackend = burn::backend::Wgpu;

// ─── Evaluation Configuration ────────────────────────────────────────────────
// Everything one evaluation run needs. Serialisable so the
// effective settings can be logged as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    pub checkpoint:    String,
    pub valid_file:    String,
    pub vocab_path:    String,
    pub tokenizer:     String,
    pub emb_size:      usize,
    pub dropout:       f64,
    pub num_classes:   usize,
    pub num_feat_maps: usize,
    pub kernel_sizes:  Vec<usize>,
    pub device:        DeviceKind,
    pub skip_invalid:  bool,
    pub unk_token:     Option<String>,
}

impl EvalConfig {
    /// Architecture to rebuild before loading weights.
    /// Vocabulary size comes from the word table, not the CLI.
    pub fn model_config(&self, vocab_size: usize) -> TopicCnnConfig {
        TopicCnnConfig::new(
            vocab_size,
            self.emb_size,
            self.dropout,
            self.kernel_sizes.clone(),
            self.num_feat_maps,
            self.num_classes,
        )
    }
}

// ─── EvalUseCase ──────────────────────────────────────────────────────────────
pub struct EvalUseCase {
    config: EvalConfig,
}

impl EvalUseCase {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Evaluate on the wgpu backend, on the configured device
    pub fn execute(&self) -> Result<EvalReport> {
        let device = self.config.device.wgpu_device();
        tracing::info!("Using WGPU device: {:?}", device);
        self.execute_on::<InferBackend>(&device)
    }

    /// Evaluate on any plain (non-autodiff) backend
    pub fn execute_on<B: Backend>(&self, device: &B::Device) -> Result<EvalReport> {
        let cfg = &self.config;
        tracing::debug!("Eval config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Vocabulary ────────────────────────────────────────────────
        let vocab = Vocabulary::load(&cfg.vocab_path)?;
        if vocab.num_labels() != cfg.num_classes {
            tracing::warn!(
                "--num-classes is {} but the topic table has {} labels; \
                 the confusion matrix follows the topic table",
                cfg.num_classes,
                vocab.num_labels()
            );
        }

        // ── Step 2: Tokenizer ─────────────────────────────────────────────────
        let tokenizer = WordPieceTokenizer::load(&cfg.tokenizer)?;

        // ── Step 3: Model ─────────────────────────────────────────────────────
        let ckpt       = CheckpointLoader::new(&cfg.checkpoint);
        let model_cfg  = cfg.model_config(vocab.num_words());
        let classifier = CnnClassifier::<B>::from_checkpoint(&model_cfg, &ckpt, device)?;

        // ── Step 4: Score ─────────────────────────────────────────────────────
        let oov = OovPolicy::from_unk_token(&vocab, cfg.unk_token.as_deref())?;
        let line_policy = if cfg.skip_invalid {
            LinePolicy::SkipInvalid
        } else {
            LinePolicy::Strict
        };

        let scorer = ValidationScorer::new(&vocab, tokenizer, classifier)
            .with_oov_policy(oov)
            .with_line_policy(line_policy);
        let report = scorer.eval_validation_set(&cfg.valid_file)?;

        for (class, recall) in report.confusion.per_class_recall().iter().enumerate() {
            if let Some(r) = recall {
                tracing::debug!("class {:>2}: recall {:.4}", class, r);
            }
        }
        tracing::info!(
            "Scored {} examples over {} topics: {} correct, {} skipped",
            report.total,
            report.confusion.num_labels(),
            report.correct,
            report.skipped
        );

        // ── Step 5: Results file ──────────────────────────────────────────────
        ResultsWriter::for_checkpoint(ckpt.path())?.append(&report)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::EvalError;
    use crate::ml::model::TopicCnn;
    use crate::test_support::{write_tokenizer_json, write_vocab_json};
    use burn::backend::NdArray;
    use burn::record::{CompactRecorder, Recorder};
    use std::fs;

    type TestBackend = NdArray;

    const WORDS:  [&str; 6] = ["the", "team", "won", "band", "played", "atoms"];
    const LABELS: [&str; 3] = ["music", "science", "sports"];

    /// Lay out a run directory like training leaves it:
    ///   <root>/data/{vocab,tokenizer}.json, <root>/data/valid.txt,
    ///   <root>/checkpoints/best.mpk.gz
    fn run_dir(valid: &str) -> (tempfile::TempDir, EvalConfig) {
        let root = tempfile::tempdir().unwrap();
        let data = root.path().join("data");
        fs::create_dir_all(&data).unwrap();

        let vocab_path = write_vocab_json(&data, &WORDS, &LABELS);
        let tok_path   = write_tokenizer_json(&data, &WORDS);
        let valid_path = data.join("valid.txt");
        fs::write(&valid_path, valid).unwrap();

        let config = EvalConfig {
            checkpoint:    root.path().join("checkpoints/best").display().to_string(),
            valid_file:    valid_path.display().to_string(),
            vocab_path:    vocab_path.display().to_string(),
            tokenizer:     tok_path.display().to_string(),
            emb_size:      8,
            dropout:       0.5,
            num_classes:   LABELS.len(),
            num_feat_maps: 4,
            kernel_sizes:  vec![2, 3],
            device:        DeviceKind::Cpu,
            skip_invalid:  false,
            unk_token:     None,
        };

        let device = Default::default();
        let model: TopicCnn<TestBackend> = config.model_config(WORDS.len() + 2).init(&device);
        fs::create_dir_all(root.path().join("checkpoints")).unwrap();
        CompactRecorder::new()
            .record(model.into_record(), root.path().join("checkpoints/best"))
            .unwrap();

        (root, config)
    }

    #[test]
    fn test_end_to_end_report_and_results_file() {
        let (root, config) = run_dir(
            "SPORTS ||| The team won\nmusic ||| the band played\nscience ||| atoms\n",
        );

        let report = EvalUseCase::new(config)
            .execute_on::<TestBackend>(&Default::default())
            .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.confusion.num_labels(), 3);
        assert_eq!(report.confusion.total(), 3);
        assert_eq!(report.confusion.trace(), report.correct as u64);

        let results = fs::read_to_string(root.path().join("results/val_acc_best.txt")).unwrap();
        assert_eq!(results, format!("{}\n", report.accuracy_line()));
    }

    #[test]
    fn test_repeated_runs_agree_and_append() {
        let (root, config) = run_dir("sports ||| the team won\nmusic ||| the band\n");
        let use_case = EvalUseCase::new(config);

        let first  = use_case.execute_on::<TestBackend>(&Default::default()).unwrap();
        let second = use_case.execute_on::<TestBackend>(&Default::default()).unwrap();
        assert_eq!(first, second);

        let results = fs::read_to_string(root.path().join("results/val_acc_best.txt")).unwrap();
        assert_eq!(results.lines().count(), 2);
    }

    #[test]
    fn test_unknown_word_needs_fallback() {
        // "referee" is [UNK] for the tokenizer, and [UNK] is not in w2i
        let (_root, config) = run_dir("sports ||| the referee\n");
        let err = EvalUseCase::new(config)
            .execute_on::<TestBackend>(&Default::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::UnknownToken { line: 1, token: "[UNK]".into() })
        );
    }

    #[test]
    fn test_missing_checkpoint_fails() {
        let (_root, mut config) = run_dir("sports ||| the team\n");
        config.checkpoint = "/no/such/checkpoint".to_string();
        assert!(EvalUseCase::new(config)
            .execute_on::<TestBackend>(&Default::default())
            .is_err());
    }
}
