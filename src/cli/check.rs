use std::fs;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::error::{Result, ShiplogError};
use crate::store::Index;

/// Audit index/page consistency without repairing anything.
///
/// Reports index entries whose page is missing, page directories absent
/// from the index, and uniqueness/order violations in hand-edited index
/// files. Any finding fails the command.
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path)?;
    let index = Index::load(&config.index_file)?;

    let problems = collect_problems(&index, &config)?;

    if problems.is_empty() {
        println!("Checked {} entries: no problems found.", index.len());
        return Ok(());
    }

    for problem in &problems {
        println!("{}", problem);
    }

    Err(ShiplogError::Audit(format!(
        "{} problem(s) found",
        problems.len()
    )))
}

fn collect_problems(index: &Index, config: &Config) -> Result<Vec<String>> {
    let mut problems = Vec::new();

    // Every index entry owns exactly one rendered page
    for entry in index.entries() {
        let page = entry.page_path(&config.entries_dir);
        if !page.is_file() {
            problems.push(format!(
                "missing page for '{}': {}",
                entry.slug,
                page.display()
            ));
        }
    }

    // Every page directory must be backed by an index record. Plain files
    // (the index itself lives here) are not pages.
    if config.entries_dir.is_dir() {
        for dir_entry in fs::read_dir(&config.entries_dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            if !path.is_dir() {
                continue;
            }

            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if index.find(name).is_none() {
                    problems.push(format!("orphan page directory: {}", path.display()));
                }
            }
        }
    }

    // Hand-edited index files can break the store's invariants
    for slug in index.duplicate_slugs() {
        problems.push(format!("duplicate slug in index: '{}'", slug));
    }

    if !index.is_sorted() {
        problems.push(
            "index is not in canonical order (date descending, slug ascending on ties)"
                .to_string(),
        );
    }

    Ok(problems)
}
