// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `eval` subcommand and all its flags.
//
// The model flags must match the ones used for training:
// they rebuild the architecture before the checkpoint's
// weights are loaded into it.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use crate::application::eval_use_case::EvalConfig;
use crate::ml::classifier::DeviceKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a checkpoint on a labelled validation file
    Eval(EvalArgs),
}

/// Where to run inference
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceArg {
    /// Default GPU adapter
    Gpu,
    /// Software (CPU) adapter
    Cpu,
}

impl From<DeviceArg> for DeviceKind {
    fn from(d: DeviceArg) -> Self {
        match d {
            DeviceArg::Gpu => DeviceKind::Gpu,
            DeviceArg::Cpu => DeviceKind::Cpu,
        }
    }
}

/// All arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Trained checkpoint (with or without the .mpk.gz extension)
    #[arg(long, alias = "checkpoint_dir")]
    pub checkpoint: String,

    /// Validation file, one "<topic> ||| <text>" per line
    #[arg(long, default_value = "data/topicclass_valid.txt")]
    pub valid_file: String,

    /// JSON file with the word (w2i) and topic (t2i) tables
    #[arg(long, default_value = "data/vocab.json")]
    pub vocab: String,

    /// HuggingFace tokenizer.json used at training time
    #[arg(long, default_value = "data/tokenizer.json")]
    pub tokenizer: String,

    /// Number of embedding dimensions
    #[arg(long, default_value_t = 300)]
    pub emb_size: usize,

    /// Dropout probability the model was trained with
    /// (inactive during evaluation, kept for the architecture)
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,

    /// Number of topics the classifier head outputs
    #[arg(long, default_value_t = 16)]
    pub num_classes: usize,

    /// Feature maps produced by each convolution
    #[arg(long, default_value_t = 100)]
    pub num_feat_maps: usize,

    /// Convolution kernel sizes, one conv per size
    #[arg(long, num_args = 1.., default_values_t = [3, 4, 5])]
    pub kernel_sizes: Vec<usize>,

    #[arg(long, value_enum, default_value_t = DeviceArg::Gpu)]
    pub device: DeviceArg,

    /// Skip malformed lines and unknown tokens/labels instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Map out-of-vocabulary tokens to this token's index (e.g. "[UNK]")
    #[arg(long)]
    pub unk_token: Option<String>,
}

/// Convert CLI EvalArgs into the application-layer EvalConfig.
/// The application layer never sees clap types.
impl From<EvalArgs> for EvalConfig {
    fn from(a: EvalArgs) -> Self {
        EvalConfig {
            checkpoint:    a.checkpoint,
            valid_file:    a.valid_file,
            vocab_path:    a.vocab,
            tokenizer:     a.tokenizer,
            emb_size:      a.emb_size,
            dropout:       a.dropout,
            num_classes:   a.num_classes,
            num_feat_maps: a.num_feat_maps,
            kernel_sizes:  a.kernel_sizes,
            device:        a.device.into(),
            skip_invalid:  a.skip_invalid,
            unk_token:     a.unk_token,
        }
    }
}
