use chrono::NaiveDate;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{QuireError, Result};
use crate::lifecycle::Inventory;
use crate::models::{ContentItem, DATE_FORMAT};

/// Picks one draft out of the current inventory
pub trait Selector {
    /// Return an index into `drafts`. Called only with a non-empty slice.
    fn select(&mut self, drafts: &[ContentItem]) -> Result<usize>;
}

/// Interactive selector: lists the drafts and asks for an index
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Selector for PromptSelector<R, W> {
    fn select(&mut self, drafts: &[ContentItem]) -> Result<usize> {
        let count = drafts.len();

        for (index, draft) in drafts.iter().enumerate() {
            writeln!(self.output, "{}: {}", index, draft.file_name())?;
        }

        loop {
            write!(self.output, "Draft to publish [0-{}]: ", count.saturating_sub(1))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(QuireError::InvalidSelection(
                    "input ended before a draft was chosen".to_string(),
                ));
            }

            match parse_selection(line.trim(), count) {
                Ok(index) => return Ok(index),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

/// Non-interactive selector carrying an index chosen up front
pub struct FixedSelector(pub usize);

impl Selector for FixedSelector {
    fn select(&mut self, drafts: &[ContentItem]) -> Result<usize> {
        check_range(self.0, drafts.len())
    }
}

/// Parse a typed selection against a fixed draft count
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let index: usize = input
        .parse()
        .map_err(|_| QuireError::InvalidSelection(format!("'{}' is not a number", input)))?;
    check_range(index, count)
}

fn check_range(index: usize, count: usize) -> Result<usize> {
    if index < count {
        Ok(index)
    } else {
        Err(QuireError::InvalidSelection(format!(
            "{} is outside 0-{}",
            index,
            count.saturating_sub(1)
        )))
    }
}

/// Moves a chosen draft into the posts directory
pub struct Promoter<'a> {
    config: &'a Config,
    inventory: Inventory<'a>,
}

impl<'a> Promoter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            inventory: Inventory::new(config),
        }
    }

    /// Post path a draft is promoted to on `today`
    pub fn destination_for(&self, draft: &ContentItem, today: NaiveDate) -> PathBuf {
        self.config
            .posts_dir
            .join(format!("{}-{}", today.format(DATE_FORMAT), draft.file_name()))
    }

    /// Promote one draft, chosen by `selector`, to a post dated `today`.
    ///
    /// Nothing on disk changes unless the final rename succeeds. An existing
    /// post at the destination is never overwritten.
    pub fn publish<S: Selector + ?Sized>(
        &self,
        today: NaiveDate,
        selector: &mut S,
    ) -> Result<PathBuf> {
        let drafts = self.inventory.list_drafts()?;
        if drafts.is_empty() {
            return Err(QuireError::NoDrafts);
        }

        let index = check_range(selector.select(&drafts)?, drafts.len())?;
        let draft = &drafts[index];
        let destination = self.destination_for(draft, today);

        if destination.exists() {
            return Err(QuireError::PostExists(destination));
        }

        fs::rename(&draft.path, &destination)?;

        Ok(destination)
    }
}
