//! Data models module
//!
//! Defines the Entry domain record and its path/url derivation helpers.
//! An Entry is created exactly once, from validated command-line input,
//! and is never mutated afterwards.

pub mod entry;

pub use entry::Entry;
