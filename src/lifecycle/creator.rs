use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{QuireError, Result};
use crate::models::{slugify, ContentKind, DATE_FORMAT};
use crate::renderer::{RenderContext, TemplateRenderer};

/// Creates new drafts and posts from templates
pub struct Creator<'a> {
    config: &'a Config,
    renderer: TemplateRenderer<'a>,
}

impl<'a> Creator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(config),
        }
    }

    /// Canonical path for a new item of `kind` titled `title`
    pub fn target_path(&self, kind: ContentKind, title: &str, today: NaiveDate) -> Result<PathBuf> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(QuireError::InvalidTitle(format!(
                "'{}' produces an empty file name",
                title
            )));
        }
        if slug.contains(['/', '\\']) || slug == "." || slug == ".." {
            return Err(QuireError::InvalidTitle(format!(
                "'{}' would leave the {} directory",
                title, kind
            )));
        }

        let file_name = match kind {
            ContentKind::Draft => format!("{}.{}", slug, self.config.extension),
            ContentKind::Post => format!(
                "{}-{}.{}",
                today.format(DATE_FORMAT),
                slug,
                self.config.extension
            ),
        };

        Ok(self.config.dir_for(kind).join(file_name))
    }

    /// Render the template for `kind` and write it to the canonical path.
    ///
    /// A file already at that path is overwritten.
    pub fn create(&self, kind: ContentKind, title: &str, today: NaiveDate) -> Result<PathBuf> {
        let target = self.target_path(kind, title, today)?;
        let content = self.renderer.render(kind, &RenderContext { title })?;

        fs::write(&target, content)?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentItem;
    use tempfile::TempDir;

    fn create_test_config(root: &TempDir) -> Config {
        let config = Config {
            drafts_dir: root.path().join("_drafts"),
            posts_dir: root.path().join("_posts"),
            extension: "markdown".to_string(),
            templates: crate::config::Templates {
                dir: root.path().join("_templates"),
                ..Default::default()
            },
        };
        fs::create_dir_all(&config.drafts_dir).unwrap();
        fs::create_dir_all(&config.posts_dir).unwrap();
        fs::create_dir_all(&config.templates.dir).unwrap();
        fs::write(config.template_for(ContentKind::Post), "post: {{{title}}}\n").unwrap();
        fs::write(config.template_for(ContentKind::Draft), "draft: {{{title}}}\n").unwrap();
        config
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_create_draft() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        let path = creator.create(ContentKind::Draft, "My Title", day()).unwrap();

        assert_eq!(path, config.drafts_dir.join("my-title.markdown"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "draft: My Title\n");
    }

    #[test]
    fn test_create_post_is_dated() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        let path = creator.create(ContentKind::Post, "Hello  World", day()).unwrap();

        assert_eq!(path, config.posts_dir.join("2024-03-05-hello-world.markdown"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "post: Hello  World\n");

        let item = ContentItem::new(ContentKind::Post, &path);
        assert_eq!(item.publish_date(), Some(day()));
    }

    #[test]
    fn test_create_twice_overwrites() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        let first = creator.create(ContentKind::Draft, "Same", day()).unwrap();
        fs::write(&first, "edited").unwrap();
        let second = creator.create(ContentKind::Draft, "same", day()).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "draft: same\n");
        assert_eq!(fs::read_dir(&config.drafts_dir).unwrap().count(), 1);
    }

    #[test]
    fn test_create_blank_title_rejected() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        let result = creator.create(ContentKind::Draft, "   ", day());

        assert!(matches!(result, Err(QuireError::InvalidTitle(_))));
        assert_eq!(fs::read_dir(&config.drafts_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_create_rejects_path_like_titles() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        for title in ["../_posts/Sneaky", "a/b", "..\\up", "..", "."] {
            let result = creator.create(ContentKind::Draft, title, day());
            assert!(
                matches!(result, Err(QuireError::InvalidTitle(_))),
                "accepted {:?}",
                title
            );
        }

        assert_eq!(fs::read_dir(&config.drafts_dir).unwrap().count(), 0);
        assert_eq!(fs::read_dir(&config.posts_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_target_path_stays_in_kind_directory() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        let creator = Creator::new(&config);

        let draft = creator.target_path(ContentKind::Draft, "Dots... ok", day()).unwrap();
        assert_eq!(draft.parent(), Some(config.drafts_dir.as_path()));

        let post = creator.target_path(ContentKind::Post, "v1.2 notes", day()).unwrap();
        assert_eq!(post.parent(), Some(config.posts_dir.as_path()));
    }

    #[test]
    fn test_create_missing_template_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        fs::remove_file(config.template_for(ContentKind::Post)).unwrap();
        let creator = Creator::new(&config);

        let result = creator.create(ContentKind::Post, "Title", day());

        assert!(matches!(result, Err(QuireError::TemplateRender(_))));
        assert_eq!(fs::read_dir(&config.posts_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_create_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let config = create_test_config(&temp);
        fs::remove_dir(&config.drafts_dir).unwrap();
        let creator = Creator::new(&config);

        let result = creator.create(ContentKind::Draft, "Title", day());

        assert!(matches!(result, Err(QuireError::Io(_))));
    }
}
