//! CLI Argument Structures
//!
//! This module contains all CLI argument definitions and command structures
//! used by the townsplit binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Grow town-name prefix and suffix vocabularies
#[derive(Parser)]
#[command(name = "townsplit")]
#[command(version = townsplit_rs::VERSION)]
#[command(about = "Split generated town names into left and right vocabularies")]
#[command(long_about = "
Split generated town names into a left (prefix) part and a right (suffix) part.
A name that starts with a known left word teaches a new right word; a name that
ends with a known right word teaches a new left word. Both word lists are
rewritten, sorted, when the run ends.

Common Usage:

  # Learn from a file of candidate names
  townsplit split towns.1.txt towns.2.txt new-names.txt

  # Learn from 500 names pulled from a name generator
  townsplit fetch towns.1.txt towns.2.txt 500 --endpoint https://names.example.com/towns

  # Invent ten names from the learned pieces
  townsplit compose towns.1.txt towns.2.txt --count 10
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to .townsplit.yml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every name in a word-list file
    Split(SplitArgs),

    /// Classify names streamed from the remote name generator
    Fetch(FetchArgs),

    /// Compose random names from the two vocabularies
    Compose(ComposeArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a townsplit configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// The two vocabulary files every command works on
#[derive(Args, Debug, Clone)]
pub struct VocabularyArgs {
    /// Left word list (known prefixes), rewritten on completion
    pub left_file: PathBuf,

    /// Right word list (known suffixes), rewritten on completion
    pub right_file: PathBuf,
}

#[derive(Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub vocabularies: VocabularyArgs,

    /// Candidate names, one per line
    pub new_words_file: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub vocabularies: VocabularyArgs,

    /// Number of names to fetch and classify
    pub how_many: usize,

    /// Name generator URL (overrides fetch.endpoint)
    #[arg(long, env = "TOWNSPLIT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Names requested per page (overrides fetch.batch_size)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Retries per failed page (overrides fetch.max_retries)
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Save both word lists every N names (overrides output.checkpoint_every)
    #[arg(long)]
    pub checkpoint_every: Option<usize>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress and per-name tags
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub vocabularies: VocabularyArgs,

    /// Number of names to compose
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".townsplit.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short = 'f', long = "file", required = true)]
    pub file: PathBuf,
}
