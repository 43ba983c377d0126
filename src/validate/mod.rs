//! Argument validation module
//!
//! Turns the raw optional flag values captured by clap into a fully-typed
//! Entry: presence of every field, then date shape, then slug shape, in
//! that order. All failures here are fatal and happen before any
//! filesystem mutation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ShiplogError};
use crate::models::Entry;

// Shape check only: calendar validity is deliberately not enforced, so
// 2025-13-40 passes. Index ordering relies on plain string comparison of
// this fixed-width form.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));

/// Raw entry fields as captured from the command line, prior to validation
#[derive(Debug, Default, Clone)]
pub struct EntryDraft {
    pub date: Option<String>,
    pub slug: Option<String>,
    pub thing: Option<String>,
    pub kind: Option<String>,
    pub proof_url: Option<String>,
    pub proof_text: Option<String>,
    pub reflection: Option<String>,
}

impl EntryDraft {
    /// Validate every field and produce the typed Entry.
    ///
    /// Presence is checked first, in flag order (date, slug, thing, type,
    /// proofUrl, proofText, reflection); the first missing field fails the
    /// whole draft. An empty value counts as missing.
    pub fn validate(self) -> Result<Entry> {
        let date = require("date", self.date)?;
        let slug = require("slug", self.slug)?;
        let thing = require("thing", self.thing)?;
        let kind = require("type", self.kind)?;
        let proof_url = require("proofUrl", self.proof_url)?;
        let proof_text = require("proofText", self.proof_text)?;
        let reflection = require("reflection", self.reflection)?;

        if !DATE_RE.is_match(&date) {
            return Err(ShiplogError::InvalidDateFormat(date));
        }

        if !SLUG_RE.is_match(&slug) {
            return Err(ShiplogError::InvalidSlugFormat(slug));
        }

        Ok(Entry {
            date,
            slug,
            thing,
            kind,
            proof_text,
            proof_url,
            reflection,
        })
    }
}

fn require(key: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ShiplogError::MissingArgument(key.to_string())),
    }
}
