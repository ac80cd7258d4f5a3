// ============================================================
// Layer 4 — Topic Batcher
// ============================================================
// Converts one encoded Example into the tensors the CNN
// expects.
//
// Evaluation scores examples one at a time, so every batch has
// batch_size = 1 and no padding is ever needed:
//
//   token_ids [1, 7, 42, 2]
//        │
//        ▼
//   input_ids: [[1, 7, 42, 2]]          shape [1, 4]  (Int)
//   mask:      [[1.0, 1.0, 1.0, 1.0]]   shape [1, 4]  (Float)
//
// The mask is still built so the model's forward signature is
// the same one a padded training batch would use.
//
// Reference: Burn Book §4 (Batcher)

use burn::prelude::*;

/// A single-example batch ready for the forward pass.
#[derive(Debug, Clone)]
pub struct TopicBatch<B: Backend> {
    /// Token indices — shape: [1, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// 1.0 for every real token — shape: [1, seq_len]
    pub mask: Tensor<B, 2>,
}

/// Holds the target device so tensors are created on the
/// right GPU/CPU.
#[derive(Clone, Debug)]
pub struct TopicBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TopicBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Build the batch for one encoded sequence.
    pub fn batch(&self, token_ids: &[u32]) -> TopicBatch<B> {
        let seq_len = token_ids.len();

        // Burn Int tensors are built from i32 slices
        let flat: Vec<i32> = token_ids.iter().map(|&x| x as i32).collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([1, seq_len]);

        // No padding inside a single example, so the mask is all ones
        let mask = Tensor::<B, 2>::ones([1, seq_len], &self.device);

        TopicBatch { input_ids, mask }
    }
}
