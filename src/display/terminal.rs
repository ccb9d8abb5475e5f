//! TTY detection and color support logic

use std::io::IsTerminal;

/// Decide whether stdout output should be styled
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Color decision from an environment lookup and the TTY status.
///
/// `NO_COLOR` wins over everything, then `CLICOLOR_FORCE` (non-zero),
/// then `CLICOLOR=0`, then the TTY check.
fn colors_enabled<F>(var: F, is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}
