//! Terminal display module
//!
//! Prints the markdown summaries produced by list/show, richly formatted
//! when the terminal supports it, plain text otherwise.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
