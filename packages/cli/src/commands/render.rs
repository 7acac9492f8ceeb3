use super::{open_session, SessionSource};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_renderer::HtmlOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Which screen to render (editor, preview)
    #[arg(long, default_value = "preview")]
    pub view: String,

    /// Components JSON to start from instead of the starter page
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// JSON array of editor events to replay before rendering
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Device override (desktop, tablet, mobile)
    #[arg(short, long)]
    pub device: Option<String>,

    /// Write HTML to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit HTML without indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut shell = open_session(
        &config,
        SessionSource {
            page: args.page.as_deref(),
            events: args.events.as_deref(),
            device: args.device.as_deref(),
        },
    )?;

    let options = if args.compact {
        HtmlOptions::compact()
    } else {
        HtmlOptions::default()
    };

    let html = match args.view.as_str() {
        "editor" => shell.editor_html(&options),
        "preview" => shell.preview_html(&options),
        other => {
            return Err(anyhow!(
                "Invalid view: {}. Use: editor or preview",
                other
            ))
        }
    };

    match args.out {
        Some(path) => {
            fs::write(&path, html)?;
            eprintln!(
                "  {} {} view → {}",
                "✓".green(),
                args.view,
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
