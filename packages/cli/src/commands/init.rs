use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Page title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Start with an empty canvas instead of the welcome section
    #[arg(long)]
    pub empty: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft page...".bright_blue().bold());

    let mut config = Config::default();
    if let Some(title) = args.title {
        config.page_title = title;
    }
    config.starter_page = !args.empty;

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Run: pagecraft inspect");
    println!("  2. Run: pagecraft render --view preview --out index.html");

    Ok(())
}
