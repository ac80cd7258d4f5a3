// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn model code.
// The scorer above it only ever sees the Classifier trait.
//
// What's in this layer:
//
//   model.rs      — The CNN topic classifier
//                   • Word embeddings (masked)
//                   • One Conv1d per kernel size + ReLU
//                   • Max-over-time pooling
//                   • Dropout + linear head to class logits
//
//   classifier.rs — Inference wrapper
//                   Restores the model from a checkpoint and
//                   implements Classifier by running one
//                   single-example batch per call
//
// Reference: Burn Book §3 (Building Blocks)
//            Kim (2014) Convolutional Neural Networks for
//            Sentence Classification

/// CNN topic classifier architecture
pub mod model;

/// Checkpoint-backed Classifier implementation
pub mod classifier;
