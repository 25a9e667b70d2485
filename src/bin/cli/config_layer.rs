//! Configuration Layer Management
//!
//! Builds the effective configuration from defaults, a configuration file
//! (explicit `--config`, else an implicit `.townsplit.yml` in the working
//! directory) and finally command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::args::FetchArgs;
use townsplit_rs::TownsplitConfig;

/// Convert CLI arguments into configuration overrides
pub trait ApplyCliArgs<T> {
    /// Overlay the values present in `args`
    fn apply_cli_args(&mut self, args: &T);
}

impl ApplyCliArgs<FetchArgs> for TownsplitConfig {
    fn apply_cli_args(&mut self, args: &FetchArgs) {
        if let Some(endpoint) = &args.endpoint {
            self.fetch.endpoint = endpoint.clone();
        }
        if let Some(batch_size) = args.batch_size {
            self.fetch.batch_size = batch_size;
        }
        if let Some(max_retries) = args.max_retries {
            self.fetch.max_retries = max_retries;
        }
        if let Some(checkpoint_every) = args.checkpoint_every {
            self.output.checkpoint_every = checkpoint_every;
        }
    }
}

/// Pick the configuration file to load, if any
fn resolve_config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| TownsplitConfig::discover(working_dir))
}

/// Load the file layer of the configuration
pub fn load_configuration(explicit: Option<&Path>) -> anyhow::Result<TownsplitConfig> {
    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;

    match resolve_config_path(explicit, &working_dir) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            TownsplitConfig::from_yaml_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })
        }
        None => Ok(TownsplitConfig::default()),
    }
}

/// Full layered configuration for the fetch command
pub fn build_fetch_config(
    explicit: Option<&Path>,
    args: &FetchArgs,
) -> anyhow::Result<TownsplitConfig> {
    let mut config = load_configuration(explicit)?;
    config.apply_cli_args(args);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::VocabularyArgs;
    use tempfile::tempdir;

    fn fetch_args() -> FetchArgs {
        FetchArgs {
            vocabularies: VocabularyArgs {
                left_file: PathBuf::from("l.txt"),
                right_file: PathBuf::from("r.txt"),
            },
            how_many: 10,
            endpoint: None,
            batch_size: None,
            max_retries: None,
            checkpoint_every: None,
            json: false,
            quiet: false,
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = TownsplitConfig::default();
        config.fetch.batch_size = 7;

        let mut args = fetch_args();
        args.endpoint = Some("http://localhost:1/names".to_string());
        args.checkpoint_every = Some(3);
        config.apply_cli_args(&args);

        assert_eq!(config.fetch.endpoint, "http://localhost:1/names");
        assert_eq!(config.fetch.batch_size, 7);
        assert_eq!(config.output.checkpoint_every, 3);
    }

    #[test]
    fn test_explicit_path_beats_discovery() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(".townsplit.yml"), "fetch:\n  batch_size: 2\n").unwrap();

        let discovered = resolve_config_path(None, dir.path());
        assert_eq!(discovered, Some(dir.path().join(".townsplit.yml")));

        let explicit = dir.path().join("other.yml");
        assert_eq!(
            resolve_config_path(Some(&explicit), dir.path()),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = load_configuration(Some(Path::new("/no/such/townsplit.yml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
