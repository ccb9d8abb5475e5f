use std::io;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::lifecycle::{FixedSelector, PromptSelector, Promoter};

/// Promote a draft to a dated post
pub fn run(index: Option<usize>, config_path: Option<PathBuf>, date: Option<String>) -> Result<()> {
    let config = config::resolve(config_path)?;
    let today = super::resolve_date(date)?;
    let promoter = Promoter::new(&config);

    let destination = match index {
        Some(index) => promoter.publish(today, &mut FixedSelector(index))?,
        None => {
            let stdin = io::stdin();
            let mut selector = PromptSelector::new(stdin.lock(), io::stdout());
            promoter.publish(today, &mut selector)?
        }
    };

    println!("Published: {}", destination.display());

    Ok(())
}
