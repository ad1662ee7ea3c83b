//! Init command - create formdoc.toml and a templates/ directory

use anyhow::{Result, bail};
use colored::Colorize;
use formdoc_core::config::{CONFIG_FILE, Config};
use std::env;
use std::path::PathBuf;

/// Directory created for user templates
const TEMPLATES_DIR: &str = "templates";

pub fn run(verbose: bool) -> Result<()> {
    let current_dir = env::current_dir()?;
    let config_path = current_dir.join(CONFIG_FILE);

    if config_path.exists() {
        bail!("{} already exists in {}", CONFIG_FILE, current_dir.display());
    }

    if verbose {
        println!("{} Initializing in {}", "→".cyan(), current_dir.display());
    }

    let mut config = Config::default();
    config.templates.dir = Some(PathBuf::from(TEMPLATES_DIR));
    config.to_file(&config_path)?;
    std::fs::create_dir_all(current_dir.join(TEMPLATES_DIR))?;

    println!("{} Created {}", "✓".green().bold(), CONFIG_FILE);
    println!("{} Created {}/", "✓".green().bold(), TEMPLATES_DIR);

    println!("\n{} Next steps:", "→".cyan());
    println!("  1. formdoc skeleton > {}/meu-template.json", TEMPLATES_DIR);
    println!("  2. formdoc check {}/meu-template.json", TEMPLATES_DIR);
    println!("  3. formdoc list");

    Ok(())
}
