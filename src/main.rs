//! NTMapper - map network topology from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use ntmapper_app::config::{default_config_path, init_config_file, load_settings};
use ntmapper_core::prelude::*;

/// NTMapper - scan devices, register them, and patch their ports
#[derive(Parser, Debug)]
#[command(name = "ntmapper")]
#[command(about = "A terminal mock-up for mapping network topology", long_about = None)]
struct Args {
    /// Run in headless mode (stdin commands, NDJSON events on stdout)
    #[arg(long)]
    headless: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config.or_else(default_config_path) else {
            eprintln!("❌ Could not determine a config directory; pass --config <PATH>");
            std::process::exit(1);
        };
        if init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    ntmapper::init()?;

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result = if args.headless {
        ntmapper::run_headless(settings).await
    } else {
        ntmapper::run(settings).await
    };

    if let Err(e) = &result {
        eprintln!("❌ {}", e);
        eprintln!(
            "   Details: {}",
            ntmapper_core::logging::get_current_log_file().display()
        );
    }
    result
}
