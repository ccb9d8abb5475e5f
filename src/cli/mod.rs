//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - post / draft: Create a dated post or an undated draft
//! - publish: Promote a draft to a post
//! - drafts: List current drafts
//! - init: Scaffold directories, templates, and quire.toml
pub mod create;
pub mod drafts;
pub mod init;
pub mod publish;

use chrono::{Local, NaiveDate};

use crate::error::{QuireError, Result};
use crate::models::DATE_FORMAT;

/// Parse a `--date` override, defaulting to the local date
pub fn resolve_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
            .map_err(|e| QuireError::Config(format!("Invalid date format: {}", e))),
        None => Ok(Local::now().date_naive()),
    }
}
