//! CLI argument definitions using clap

use clap::Parser;
use convotree_core::config::default_config_path;
use convotree_core::{ConvoConfig, GeneratorKind};
use std::path::PathBuf;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "convotree.json";

#[derive(Parser, Debug)]
#[command(name = "convotree")]
#[command(about = "Branching, checkpointed conversations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./convotree.json, then ~/.convotree/config.json)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Response generator: word-salad or echo
    #[arg(long)]
    pub generator: Option<GeneratorKind>,

    /// Seed for reproducible replies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Explicit path, else the working-directory file, else the per-user file
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(path) = &self.config_file {
            return path.clone();
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return local;
        }

        default_config_path().unwrap_or(local)
    }

    /// Flags override file and environment settings
    pub fn apply_overrides(&self, config: &mut ConvoConfig) {
        if let Some(kind) = self.generator {
            config.generator.kind = kind;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}
