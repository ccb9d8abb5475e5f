//! Template renderer module
//!
//! Fills the per-kind mustache templates with the title of a new draft or
//! post. Templates are rendered with ramhorns; the title is available as
//! `{{title}}` (HTML-escaped) and `{{{title}}}` (raw).

use ramhorns::{Content, Template};
use std::fs;

use crate::config::Config;
use crate::error::{QuireError, Result};
use crate::models::ContentKind;

/// Template written by `quire init` for new posts
pub const DEFAULT_POST_TEMPLATE: &str = "---
layout: post
title: \"{{{title}}}\"
---

";

/// Template written by `quire init` for new drafts
pub const DEFAULT_DRAFT_TEMPLATE: &str = "---
layout: post
title: \"{{{title}}}\"
---

";

/// Values exposed to a template during a single render
#[derive(Content, Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub title: &'a str,
}

/// Renders the configured template for a content kind
pub struct TemplateRenderer<'a> {
    config: &'a Config,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Read the template for `kind` and render it with `context`
    pub fn render(&self, kind: ContentKind, context: &RenderContext<'_>) -> Result<String> {
        let path = self.config.template_for(kind);
        let source = fs::read_to_string(&path).map_err(|e| {
            QuireError::TemplateRender(format!(
                "Cannot read {} template '{}': {}",
                kind,
                path.display(),
                e
            ))
        })?;

        render_source(&source, context)
    }
}

/// Render a template held in memory
pub fn render_source(source: &str, context: &RenderContext<'_>) -> Result<String> {
    let template = Template::new(source)
        .map_err(|e| QuireError::TemplateRender(format!("Error parsing template: {}", e)))?;

    let mut output = template.render(context);

    // ramhorns drops the source's final line break
    let missing = trailing_newlines(source).saturating_sub(trailing_newlines(&output));
    output.push_str(&"\n".repeat(missing));

    Ok(output)
}

fn trailing_newlines(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\n').count()
}
