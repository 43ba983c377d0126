use crate::config::{self, Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Initialize a shiplog.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // Never clobber an existing config
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();

    if !config.entries_dir.exists() {
        fs::create_dir_all(&config.entries_dir)?;
        println!("Created entries directory: {}", config.entries_dir.display());
    }

    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your site title and paths",
        config_path.display()
    );
    println!("2. Run 'shiplog add' to publish your first entry");

    Ok(())
}
