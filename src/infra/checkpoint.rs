// ============================================================
// Layer 6 — Checkpoint Loader
// ============================================================
// Restores trained TopicCnn weights using Burn's CompactRecorder.
//
// The checkpoint is a single record file written at training
// time:
//
//   runs/exp1/
//     checkpoints/
//       topic_cnn_best.mpk.gz   ← weights
//     results/
//       val_acc_topic_cnn_best.txt   ← written by ResultsWriter
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip
//   - Type-safe: loading fails if the architecture doesn't match
//
// The recorder always adds its own ".mpk.gz" extension, so the
// loader accepts the path with or without it.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use std::path::{Path, PathBuf};

use crate::ml::model::TopicCnn;

/// Extension CompactRecorder appends to every record file
const RECORD_EXT: &str = ".mpk.gz";

pub struct CheckpointLoader {
    /// The path exactly as the user gave it
    path: PathBuf,
}

impl CheckpointLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path handed to the recorder: the user path minus ".mpk.gz"
    pub fn record_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        match raw.strip_suffix(RECORD_EXT) {
            Some(stem) => PathBuf::from(stem),
            None => self.path.clone(),
        }
    }

    /// Load the checkpoint's weights into `model`.
    /// `model` must have been built from the same TopicCnnConfig
    /// that was used for training.
    pub fn load_model<B: Backend>(
        &self,
        model:  TopicCnn<B>,
        device: &B::Device,
    ) -> Result<TopicCnn<B>> {
        let path = self.record_path();
        tracing::info!("Loading checkpoint '{}'", self.path.display());

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load checkpoint '{}{}'. Does the model config match training?",
                    path.display(),
                    RECORD_EXT
                )
            })?;

        Ok(model.load_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::TopicCnnConfig;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_record_path_strips_extension() {
        let ckpt = CheckpointLoader::new("runs/ckpt/model_best.mpk.gz");
        assert_eq!(ckpt.record_path(), PathBuf::from("runs/ckpt/model_best"));

        let ckpt = CheckpointLoader::new("runs/ckpt/model_best");
        assert_eq!(ckpt.record_path(), PathBuf::from("runs/ckpt/model_best"));
    }

    #[test]
    fn test_missing_checkpoint_is_an_error() {
        let device = Default::default();
        let model: TopicCnn<TestBackend> =
            TopicCnnConfig::new(10, 4, 0.0, vec![2], 2, 2).init(&device);
        let err = CheckpointLoader::new("/no/such/model")
            .load_model(model, &device)
            .unwrap_err();
        assert!(err.to_string().contains("Cannot load checkpoint"));
    }

    #[test]
    fn test_saved_weights_are_restored() {
        let dir = tempfile::tempdir().unwrap();
        let device = Default::default();
        let cfg = TopicCnnConfig::new(10, 4, 0.0, vec![2, 3], 2, 3);

        let trained: TopicCnn<TestBackend> = cfg.init(&device);
        let path = dir.path().join("model_best");
        CompactRecorder::new()
            .record(trained.clone().into_record(), path.clone())
            .unwrap();

        // A fresh model has different random weights until loaded
        let fresh: TopicCnn<TestBackend> = cfg.init(&device);
        let restored = CheckpointLoader::new(dir.path().join("model_best.mpk.gz"))
            .load_model(fresh, &device)
            .unwrap();

        let logits = |m: &TopicCnn<TestBackend>| {
            let ids = Tensor::<TestBackend, 1, Int>::from_ints([1, 5, 2].as_slice(), &device)
                .reshape([1, 3]);
            let mask = Tensor::<TestBackend, 2>::ones([1, 3], &device);
            m.forward(ids, mask).into_data().to_vec::<f32>().unwrap()
        };
        assert_eq!(logits(&trained), logits(&restored));
    }
}
