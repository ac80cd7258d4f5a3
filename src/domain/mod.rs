// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define what an evaluation
// run is made of. Nothing here touches burn, the filesystem
// or the tokenizers crate.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// The collaborators the scorer needs (a tokenizer and a
// classifier) are described as traits so the scorer can be
// unit tested with stubs and no GPU.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One encoded validation example
pub mod example;

// Confusion matrix and the final evaluation report
pub mod metrics;

// Error taxonomy for an evaluation pass
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
