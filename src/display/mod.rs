//! Terminal display module
//!
//! Renders draft listings as markdown, styled with termimad on a TTY and
//! printed plain otherwise.

mod formatter;
mod terminal;

pub use formatter::{drafts_markdown, print_markdown};
