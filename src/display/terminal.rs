//! TTY detection and color support logic

use std::io::IsTerminal;

/// Whether rich output should be used. NO_COLOR always wins, then
/// CLICOLOR_FORCE, then CLICOLOR=0, then a stdout TTY check.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(force) = std::env::var("CLICOLOR_FORCE") {
        if force != "0" {
            return true;
        }
    }

    if matches!(std::env::var("CLICOLOR"), Ok(v) if v == "0") {
        return false;
    }

    std::io::stdout().is_terminal()
}
