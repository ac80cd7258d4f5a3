// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches an artifact produced outside this
// program:
//
//   checkpoint.rs      — Restoring model weights
//                        Uses Burn's CompactRecorder to read the
//                        parameters saved at training time.
//
//   tokenizer_store.rs — Tokenizer loading
//                        Wraps the HuggingFace tokenizer.json in
//                        the domain's TextTokenizer trait.
//
//   results.rs         — Results file
//                        Appends "val acc: ..." next to the
//                        checkpoint's run directory.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint loading
pub mod checkpoint;

/// Tokenizer loading
pub mod tokenizer_store;

/// Accuracy history file
pub mod results;
