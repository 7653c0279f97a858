//! Settings parser for config.toml

use super::types::Settings;
use ntmapper_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "ntmapper";

/// Contents written by [`init_config_file`]
pub const DEFAULT_CONFIG: &str = r#"# NTMapper Configuration

[scan]
# Duration of a simulated QR scan, in milliseconds
delay_ms = 1500

[topology]
# When a port is connected while every cable is in use, a cable id is made
# up. Set to true to also add a placeholder cable record for it.
register_fabricated_cables = false

[ui]
# "unicode" or "nerd_fonts"
icons = "unicode"
"#;

/// Default location: `<config_dir>/ntmapper/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings.
///
/// With an explicit path the file must exist. Without one the default
/// location is tried and a missing file silently yields defaults. A file
/// that cannot be read or parsed is logged and replaced by defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            other => {
                debug!("No config file at {:?}, using defaults", other);
                return Ok(Settings::default());
            }
        },
    };

    Ok(read_settings_file(&config_path))
}

fn read_settings_file(config_path: &Path) -> Settings {
    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Write [`DEFAULT_CONFIG`] to `path` unless a file already exists there
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}
