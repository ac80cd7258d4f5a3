// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - No model math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No file formats here (that's Layers 4 and 6)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The tokenize → index → infer → score → aggregate loop
pub mod scorer;

// Checkpoint evaluation end to end
pub mod eval_use_case;
