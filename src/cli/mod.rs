//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: validate and publish one entry (page + index)
//! - list: print the entry index as a table
//! - show latest: display the newest entry
//! - check: audit consistency between index and pages
//! - config init: initialize configuration file

pub mod add;
pub mod check;
pub mod config;
pub mod list;
pub mod show;
