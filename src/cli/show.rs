use std::path::PathBuf;

use crate::config::{self, Config};
use crate::display;
use crate::error::{Result, ShiplogError};
use crate::models::Entry;
use crate::store::Index;

/// Display the newest entry in the index
pub fn latest(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path)?;
    let index = Index::load(&config.index_file)?;

    let entry = index
        .latest()
        .ok_or_else(|| ShiplogError::Config("No entries yet. Run 'shiplog add' first.".to_string()))?;

    let markdown = render_entry(entry, &config);
    display::print_markdown(&markdown);

    Ok(())
}

/// Build the markdown summary for one entry
fn render_entry(entry: &Entry, config: &Config) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", entry.thing));
    output.push_str(&format!("**Date:** {}\n", entry.date));
    output.push_str(&format!("**Type:** {}\n", entry.kind));
    output.push_str(&format!(
        "**Proof:** [{}]({})\n\n",
        entry.proof_text, entry.proof_url
    ));
    output.push_str(&format!("{}\n\n", entry.reflection));
    output.push_str(&format!(
        "*Page:* `{}`\n",
        entry.page_path(&config.entries_dir).display()
    ));

    output
}
