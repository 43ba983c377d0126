use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shiplog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory where entry pages are written (one subdirectory per slug)
    pub entries_dir: PathBuf,

    /// Path of the JSON index holding the full entry collection
    pub index_file: PathBuf,

    /// Public URL prefix for entry pages, used in success messages and
    /// page navigation
    pub base_url: String,

    /// Site-wide page settings
    pub site: Site,
}

/// Site-wide page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Title shown in every page header and in the <title> tag
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_dir: PathBuf::from("./log"),
            index_file: PathBuf::from("./log/entries.json"),
            base_url: "/log".to_string(),
            site: Site::default(),
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: "shiplog".to_string(),
        }
    }
}
