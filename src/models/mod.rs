//! Data models module
//!
//! Defines the content lifecycle types: ContentKind, ContentItem, and the
//! slug transform used to build file names from titles.

pub mod content;
pub mod slug;

pub use content::{ContentItem, ContentKind, DATE_FORMAT};
pub use slug::slugify;
