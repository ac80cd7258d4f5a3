// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments, hands off to the application layer, prints
// the results. All evaluation logic lives in Layer 2.
//
//   topic-eval eval --checkpoint runs/exp1/checkpoints/best
//
// Output on success:
//
//    [[12  0  1]
//     [ 0  9  0]
//     [ 1  0 14]]
//   val acc: 94.8718
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvalArgs};

#[derive(Parser, Debug)]
#[command(
    name = "topic-eval",
    version,
    about = "Evaluate a CNN topic classifier checkpoint on a labelled validation file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Eval(args) => run_eval(args),
        }
    }
}

/// Handles the `eval` subcommand.
fn run_eval(args: EvalArgs) -> Result<()> {
    use crate::application::eval_use_case::EvalUseCase;

    tracing::info!("Evaluating checkpoint '{}'", args.checkpoint);

    let report = EvalUseCase::new(args.into()).execute()?;

    println!("\n {}", report.confusion);
    println!("{}", report.accuracy_line());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::eval_use_case::EvalConfig;
    use crate::ml::classifier::DeviceKind;

    fn parse(args: &[&str]) -> EvalConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Eval(a) => a.into(),
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&["topic-eval", "eval", "--checkpoint", "ckpt/best"]);
        assert_eq!(cfg.checkpoint, "ckpt/best");
        assert_eq!(cfg.valid_file, "data/topicclass_valid.txt");
        assert_eq!(cfg.emb_size, 300);
        assert_eq!(cfg.dropout, 0.5);
        assert_eq!(cfg.num_classes, 16);
        assert_eq!(cfg.num_feat_maps, 100);
        assert_eq!(cfg.kernel_sizes, vec![3, 4, 5]);
        assert_eq!(cfg.device, DeviceKind::Gpu);
        assert!(!cfg.skip_invalid);
        assert_eq!(cfg.unk_token, None);
    }

    #[test]
    fn test_kernel_sizes_and_device() {
        let cfg = parse(&[
            "topic-eval", "eval",
            "--checkpoint_dir", "ckpt/best",
            "--kernel-sizes", "2", "3",
            "--device", "cpu",
            "--skip-invalid",
            "--unk-token", "[UNK]",
        ]);
        assert_eq!(cfg.kernel_sizes, vec![2, 3]);
        assert_eq!(cfg.device, DeviceKind::Cpu);
        assert!(cfg.skip_invalid);
        assert_eq!(cfg.unk_token.as_deref(), Some("[UNK]"));
    }

    #[test]
    fn test_checkpoint_is_required() {
        assert!(Cli::try_parse_from(["topic-eval", "eval"]).is_err());
    }
}
