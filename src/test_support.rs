// Shared fixtures for unit tests that need real files on disk.

use std::path::{Path, PathBuf};

/// Write a minimal word-level tokenizer in HuggingFace JSON format
/// (same layout a trained tokenizer.json uses) and return its path.
pub fn write_tokenizer_json(dir: &Path, words: &[&str]) -> PathBuf {
    let mut vocab = serde_json::json!({ "[UNK]": 0 });
    for (i, w) in words.iter().enumerate() {
        vocab[*w] = serde_json::json!(i + 1);
    }
    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[UNK]", "single_word": false, "lstrip": false,
             "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": { "type": "WordLevel", "vocab": vocab, "unk_token": "[UNK]" }
    });
    let path = dir.join("tokenizer.json");
    std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json).unwrap()).unwrap();
    path
}

/// Write a vocabulary file with [CLS]=0, [SEP]=1, then `words`,
/// and `labels` numbered in order.
pub fn write_vocab_json(dir: &Path, words: &[&str], labels: &[&str]) -> PathBuf {
    let mut w2i = serde_json::json!({ "[CLS]": 0, "[SEP]": 1 });
    for (i, w) in words.iter().enumerate() {
        w2i[*w] = serde_json::json!(i + 2);
    }
    let mut t2i = serde_json::json!({});
    for (i, l) in labels.iter().enumerate() {
        t2i[*l] = serde_json::json!(i);
    }
    let path = dir.join("vocab.json");
    std::fs::write(&path, serde_json::json!({ "w2i": w2i, "t2i": t2i }).to_string()).unwrap();
    path
}
