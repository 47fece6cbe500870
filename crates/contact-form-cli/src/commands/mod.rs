pub mod fields;
pub mod run;

use anyhow::Result;
use contact_form::Config;
use std::path::Path;

/// Explicit path must parse; the default path may be absent
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            Config::load(path)
        }
        None => Config::load_default(),
    }
}
