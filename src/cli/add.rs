use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::{Result, ShiplogError};
use crate::renderer::Renderer;
use crate::store::Index;
use crate::validate::EntryDraft;

/// Arguments for the add command. The seven entry flags are optional at
/// the clap level so that presence enforcement, and its error wording,
/// stays in the validator.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entry date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Unique lowercase-hyphenated identifier, also the page directory name
    #[arg(long)]
    pub slug: Option<String>,

    /// What was completed
    #[arg(long)]
    pub thing: Option<String>,

    /// Free-text category tag
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Href of the proof link
    #[arg(long = "proofUrl")]
    pub proof_url: Option<String>,

    /// Display text of the proof link
    #[arg(long = "proofText")]
    pub proof_text: Option<String>,

    /// Free-text note
    #[arg(long)]
    pub reflection: Option<String>,

    /// Dry run - print the rendered page to stdout instead of writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Validate and publish one entry: render its page and update the index
pub fn run(args: AddArgs) -> Result<()> {
    let AddArgs {
        config: config_path,
        date,
        slug,
        thing,
        kind,
        proof_url,
        proof_text,
        reflection,
        dry_run,
    } = args;

    // Resolve configuration
    let config = config::resolve(config_path)?;

    // Validate into a typed entry; nothing is written before this passes
    let entry = EntryDraft {
        date,
        slug,
        thing,
        kind,
        proof_url,
        proof_text,
        reflection,
    }
    .validate()?;

    // Derive the page destination from the slug
    let page_dir = entry.page_dir(&config.entries_dir);
    let page_path = entry.page_path(&config.entries_dir);

    // Load the index and reject duplicates before any mutation
    let mut index = Index::load(&config.index_file)?;
    if index.contains_slug(&entry.slug) {
        return Err(ShiplogError::DuplicateSlug(entry.slug));
    }

    // Render the page
    let renderer = Renderer::new(&config);
    let page = renderer.render(&entry);

    if dry_run {
        // Print to stdout; leave the filesystem untouched
        print!("{}", page);
        return Ok(());
    }

    // Write the page file, creating missing parents
    fs::create_dir_all(&page_dir)?;
    fs::write(&page_path, page)?;

    // Insert into the index and persist the full collection.
    // A failure past this point leaves the page on disk; nothing is
    // rolled back. `shiplog check` surfaces the drift.
    let url = entry.url(&config.base_url);
    index.insert(entry)?;
    index.save(&config.index_file)?;

    println!("Entry published at {}", url);
    println!("Page written to: {}", page_path.display());

    Ok(())
}
