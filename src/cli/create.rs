use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::lifecycle::Creator;
use crate::models::ContentKind;

/// Create a new draft or post from its template
pub fn run(
    kind: ContentKind,
    title: Vec<String>,
    config_path: Option<PathBuf>,
    date: Option<String>,
) -> Result<()> {
    let config = config::resolve(config_path)?;
    let today = super::resolve_date(date)?;
    let title = title.join(" ");

    let path = Creator::new(&config).create(kind, &title, today)?;

    println!("Created {}: {}", kind, path.display());

    Ok(())
}
