use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::models::Entry;
use crate::store::Index;

/// Print the entry index as a markdown table, in persisted order
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path)?;
    let index = Index::load(&config.index_file)?;

    if index.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    let markdown = render_listing(&config.site.title, index.entries());
    display::print_markdown(&markdown);

    Ok(())
}

/// Build the listing markdown: site heading, count, entry table
fn render_listing(site_title: &str, entries: &[Entry]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", site_title));

    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    output.push_str(&format!("{} {}\n\n", entries.len(), noun));

    output.push_str("| Date | Slug | Thing | Type |\n");
    output.push_str("|------|------|-------|------|\n");

    for entry in entries {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.date, entry.slug, entry.thing, entry.kind
        ));
    }

    output
}
