// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the validation file on disk and the
// tensors fed to the model.
//
// The pipeline flows in this order:
//
//   topicclass_valid.txt
//       │
//       ▼
//   ValidationLoader  → reads raw lines in file order
//       │
//       ▼
//   ExampleEncoder    → label/body split, tokenize, index lookup,
//       │               [CLS] ... [SEP] framing
//       ▼
//   Example           → (token_ids, label)
//       │
//       ▼
//   TopicBatcher      → [1, seq_len] ids + all-ones mask
//
// The Vocabulary is loaded once and borrowed by the encoder.
//
// Reference: Burn Book §4 (Datasets and Batchers)
//            Rust Book §13 (Iterators and Closures)

/// Word and topic lookup tables
pub mod vocabulary;

/// Reads the labelled validation file
pub mod loader;

/// Parses and encodes one line into an Example
pub mod encoder;

/// Builds single-example tensor batches
pub mod batcher;
