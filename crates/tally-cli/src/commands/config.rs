//! Config command implementations (show, path)

use std::path::Path;

use anyhow::Result;
use tally_core::config::default_config_path;

use super::load_config;

pub fn cmd_config_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    match default_config_path() {
        Some(path) => {
            let status = if path.exists() {
                "exists"
            } else {
                "not present, using built-in thresholds"
            };
            println!("{} ({})", path.display(), status);
        }
        None => println!("No data directory available on this platform"),
    }
    Ok(())
}
