//! Check command - validate a template file

use anyhow::Result;
use colored::Colorize;
use formdoc_core::repository::load_template_file;
use std::path::PathBuf;

pub fn run(file: PathBuf, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Checking {}", "→".cyan(), file.display());
    }

    let template = load_template_file(&file)?;

    println!(
        "{} Template '{}' is valid ({} field(s))",
        "✓".green().bold(),
        template.id,
        template.fields.len()
    );
    Ok(())
}
