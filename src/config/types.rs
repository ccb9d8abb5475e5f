use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::ContentKind;

/// Quire configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding undated drafts
    pub drafts_dir: PathBuf,

    /// Directory holding dated posts
    pub posts_dir: PathBuf,

    /// File extension for new drafts and posts, without the dot
    pub extension: String,

    /// Template locations
    pub templates: Templates,
}

/// Template file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Templates {
    /// Directory containing the template files
    pub dir: PathBuf,

    /// Template file name for posts (relative to `dir`)
    pub post: String,

    /// Template file name for drafts (relative to `dir`)
    pub draft: String,
}

impl Config {
    /// Directory a content item of the given kind lives in
    pub fn dir_for(&self, kind: ContentKind) -> &PathBuf {
        match kind {
            ContentKind::Draft => &self.drafts_dir,
            ContentKind::Post => &self.posts_dir,
        }
    }

    /// Full path of the template used for the given kind
    pub fn template_for(&self, kind: ContentKind) -> PathBuf {
        let name = match kind {
            ContentKind::Draft => &self.templates.draft,
            ContentKind::Post => &self.templates.post,
        };
        self.templates.dir.join(name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drafts_dir: PathBuf::from("_drafts"),
            posts_dir: PathBuf::from("_posts"),
            extension: "markdown".to_string(),
            templates: Templates::default(),
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("_templates"),
            post: "post.mustache".to_string(),
            draft: "draft.mustache".to_string(),
        }
    }
}
