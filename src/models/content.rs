use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::slug::unslugify;

/// Date stamp format used as the prefix of post file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a `YYYY-MM-DD` stamp
const DATE_LEN: usize = 10;

/// Lifecycle stage of a content file, decided by the directory it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Draft,
    Post,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Draft => write!(f, "draft"),
            ContentKind::Post => write!(f, "post"),
        }
    }
}

/// A draft or post file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub path: PathBuf,
}

impl ContentItem {
    pub fn new(kind: ContentKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// File name on disk, including any date stamp and extension
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File stem with the post date stamp removed
    pub fn base_name(&self) -> String {
        let stem = file_stem(&self.path);
        match self.kind {
            ContentKind::Post if split_date(&stem).is_some() => stem[DATE_LEN + 1..].to_string(),
            _ => stem,
        }
    }

    /// Human-readable title recovered from the base name
    pub fn title(&self) -> String {
        unslugify(&self.base_name())
    }

    /// Publish date encoded in a post's file name
    #[allow(dead_code)]
    pub fn publish_date(&self) -> Option<NaiveDate> {
        match self.kind {
            ContentKind::Post => split_date(&self.file_name()),
            ContentKind::Draft => None,
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse a leading `YYYY-MM-DD-` stamp
fn split_date(name: &str) -> Option<NaiveDate> {
    let stamp = name.get(..DATE_LEN)?;
    if name.as_bytes().get(DATE_LEN) != Some(&b'-') {
        return None;
    }
    NaiveDate::parse_from_str(stamp, DATE_FORMAT).ok()
}
