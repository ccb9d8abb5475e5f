use crate::config::{self, Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::models::ContentKind;
use crate::renderer::{DEFAULT_DRAFT_TEMPLATE, DEFAULT_POST_TEMPLATE};
use std::fs;
use std::path::{Path, PathBuf};

/// Scaffold the blog layout: directories, templates, and quire.toml.
///
/// Files that already exist are left untouched.
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = if config_path.exists() {
        println!("Using existing configuration: {}", config_path.display());
        config::load(&config_path)?
    } else {
        let config = Config::default();
        config::save(&config, &config_path)?;
        println!("Configuration file created: {}", config_path.display());
        config
    };

    for dir in [&config.drafts_dir, &config.posts_dir, &config.templates.dir] {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            println!("Created directory: {}", dir.display());
        }
    }

    write_template(&config.template_for(ContentKind::Post), DEFAULT_POST_TEMPLATE)?;
    write_template(&config.template_for(ContentKind::Draft), DEFAULT_DRAFT_TEMPLATE)?;

    println!("\nNext steps:");
    println!("1. Run 'quire draft <title>' to start a draft");
    println!("2. Run 'quire publish' to promote it to a post");

    Ok(())
}

fn write_template(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        eprintln!("Template already exists, keeping it: {}", path.display());
        return Ok(());
    }

    fs::write(path, content)?;
    println!("Created template: {}", path.display());
    Ok(())
}
