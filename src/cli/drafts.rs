use serde::Serialize;
use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::lifecycle::Inventory;
use crate::models::ContentItem;

/// One row of `quire drafts --json`
#[derive(Debug, Serialize)]
struct DraftEntry {
    index: usize,
    file_name: String,
    title: String,
    path: PathBuf,
}

/// List the current drafts
pub fn list(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = config::resolve(config_path)?;
    let drafts = Inventory::new(&config).list_drafts()?;

    if json {
        println!("{}", to_json(&drafts)?);
    } else {
        display::print_markdown(&display::drafts_markdown(&drafts));
    }

    Ok(())
}

fn to_json(drafts: &[ContentItem]) -> Result<String> {
    let entries: Vec<DraftEntry> = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| DraftEntry {
            index,
            file_name: draft.file_name(),
            title: draft.title(),
            path: draft.path.clone(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}
