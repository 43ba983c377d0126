//! Entry store module
//!
//! Owns the persisted JSON index of all entries: loading, slug uniqueness,
//! the canonical sort order (date descending, ties broken by slug
//! ascending) and full-replacement persistence.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ShiplogError};
use crate::models::Entry;

/// The full collection of entries, kept in persisted order
#[derive(Debug, Default)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// Load the index file, or start empty if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<Entry> = serde_json::from_str(&content).map_err(|e| {
            ShiplogError::MalformedIndex(format!("cannot parse '{}': {}", path.display(), e))
        })?;

        Ok(Self { entries })
    }

    /// All entries in persisted order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by slug
    pub fn find(&self, slug: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Whether an entry with this slug already exists
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.find(slug).is_some()
    }

    /// Newest entry under the canonical order, if any
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Insert a new entry and re-sort the whole collection.
    ///
    /// Fails with DuplicateSlug if the slug is already present; the
    /// collection is left untouched in that case.
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.contains_slug(&entry.slug) {
            return Err(ShiplogError::DuplicateSlug(entry.slug));
        }

        self.entries.push(entry);
        self.entries.sort_by(canonical_order);
        Ok(())
    }

    /// Whether the collection is in canonical order (hand-edited index
    /// files can violate it)
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| canonical_order(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Slugs that appear more than once, in first-seen order
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();

        for entry in &self.entries {
            if !seen.insert(entry.slug.as_str()) && !dupes.contains(&entry.slug) {
                dupes.push(entry.slug.clone());
            }
        }

        dupes
    }

    /// Overwrite the index file with the full collection.
    ///
    /// Pretty-printed with 2-space indentation plus a trailing newline;
    /// prior content is fully replaced, never appended to.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(&self.entries)?;
        json.push('\n');

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        Ok(())
    }
}

/// Canonical order: date descending (string comparison), slug ascending
/// on equal dates
fn canonical_order(a: &Entry, b: &Entry) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}
