use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One logged accomplishment, uniquely identified by its slug.
///
/// Field declaration order is load-bearing: serde_json emits keys in this
/// order, and the persisted record shape is fixed as
/// `date, slug, thing, type, proofText, proofUrl, reflection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Date in `YYYY-MM-DD` form; compared as a string, never parsed
    pub date: String,

    /// Unique lowercase-hyphenated identifier, also the page directory name
    pub slug: String,

    /// What was completed
    pub thing: String,

    /// Free-text category tag (`type` in the persisted record)
    #[serde(rename = "type")]
    pub kind: String,

    /// Display text of the proof link
    #[serde(rename = "proofText")]
    pub proof_text: String,

    /// Href of the proof link
    #[serde(rename = "proofUrl")]
    pub proof_url: String,

    /// Free-text note
    pub reflection: String,
}

impl Entry {
    /// Directory that holds this entry's rendered page
    pub fn page_dir(&self, entries_dir: &Path) -> PathBuf {
        entries_dir.join(&self.slug)
    }

    /// Path of this entry's rendered page file
    pub fn page_path(&self, entries_dir: &Path) -> PathBuf {
        self.page_dir(entries_dir).join("index.html")
    }

    /// Public URL of this entry under the configured base URL
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.slug)
    }
}
