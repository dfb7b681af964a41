use std::path::Path;

use anyhow::{bail, Result};

use gallery_core::AppConfig;

pub fn run(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    write_default(&path, force)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Write the default configuration without reading whatever is already there,
/// so a malformed file can be replaced.
fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    Ok(())
}
