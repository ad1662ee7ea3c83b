//! Export command - Word-compatible .doc file

use crate::context::Context;
use crate::output::write_file;
use anyhow::Result;
use colored::Colorize;
use formdoc_core::export::{export_file_name, word_document};
use formdoc_core::template::TemplateEngine;
use std::path::PathBuf;

pub fn run(
    id: String,
    data: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template(&id)?;
    let values = ctx.values(&template, data.as_deref())?;

    if verbose {
        println!("{} Exporting '{}'", "→".cyan(), template.id);
    }

    let body = TemplateEngine::new().render(&template.preview_html, &values);
    let document = word_document(Some(&template), &body, &ctx.config.document);

    let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(Some(&template))));
    write_file(&path, &document)?;

    println!(
        "{} Exported '{}' to {}",
        "✓".green().bold(),
        template.id,
        path.display()
    );
    Ok(())
}
