//! Configuration management
//!
//! Settings are layered: built-in defaults, then a JSON file, then
//! `CONVOTREE_*` environment variables. The CLI applies its flags last.

mod env_loader;
mod file_loader;
mod generator_config;
mod logging_config;
mod model;

pub use env_loader::{apply_env_overrides, load_env_overrides};
pub use file_loader::{default_config_path, load_from_file};
pub use generator_config::{GeneratorConfig, GeneratorKind};
pub use logging_config::LoggingConfig;
pub use model::ConvoConfig;
