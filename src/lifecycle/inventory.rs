use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ContentItem, ContentKind};

/// Lists the drafts currently on disk
pub struct Inventory<'a> {
    config: &'a Config,
}

impl<'a> Inventory<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// List every file directly inside the drafts directory.
    ///
    /// Entries come back in file-system order and are re-read on each call.
    /// An unreadable directory is an error; an empty one is not.
    pub fn list_drafts(&self) -> Result<Vec<ContentItem>> {
        let mut drafts = Vec::new();

        for entry in WalkDir::new(&self.config.drafts_dir)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            drafts.push(ContentItem::new(ContentKind::Draft, entry.into_path()));
        }

        Ok(drafts)
    }
}
