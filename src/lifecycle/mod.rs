//! Content lifecycle module
//!
//! The three operations over the drafts and posts directories:
//! - Creator: render a template into a new draft or dated post
//! - Inventory: list the drafts currently on disk
//! - Promoter: move a chosen draft into the posts directory, dated today

mod creator;
mod inventory;
mod promoter;

pub use creator::Creator;
pub use inventory::Inventory;
#[allow(unused_imports)]
pub use promoter::{FixedSelector, PromptSelector, Promoter, Selector};
