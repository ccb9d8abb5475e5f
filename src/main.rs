mod cli;
mod config;
mod display;
mod error;
mod lifecycle;
mod models;
mod renderer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::ContentKind;

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "Create drafts and posts for a static-site blog and publish drafts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post dated today
    Post {
        /// Title of the post
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override today's date stamp, for reproducible runs only
        #[arg(long, hide = true)]
        date: Option<String>,
    },
    /// Create a new undated draft
    Draft {
        /// Title of the draft
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Move a draft into the posts directory, dated today
    Publish {
        /// Index of the draft to publish (prompts when omitted)
        #[arg(short, long)]
        index: Option<usize>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override today's date stamp, for reproducible runs only
        #[arg(long, hide = true)]
        date: Option<String>,
    },
    /// List current drafts
    Drafts {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create quire.toml, the content directories, and default templates
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Post {
            title,
            config,
            date,
        } => cli::create::run(ContentKind::Post, title, config, date),
        Commands::Draft { title, config } => {
            cli::create::run(ContentKind::Draft, title, config, None)
        }
        Commands::Publish {
            index,
            config,
            date,
        } => cli::publish::run(index, config, date),
        Commands::Drafts { config, json } => cli::drafts::list(config, json),
        Commands::Init { config } => cli::init::run(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
