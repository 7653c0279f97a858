//! Configuration file parsing for NTMapper
//!
//! Supports `<config_dir>/ntmapper/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, parse_settings, DEFAULT_CONFIG,
};
pub use types::*;
