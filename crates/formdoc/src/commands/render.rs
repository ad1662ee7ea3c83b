//! Render command - fill a template with a value map

use crate::context::Context;
use crate::output::{print_text, write_file};
use anyhow::Result;
use colored::Colorize;
use formdoc_core::export::wrap_document;
use formdoc_core::template::TemplateEngine;
use std::path::PathBuf;

pub struct RenderArgs {
    pub id: String,
    pub data: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub document: bool,
}

/// Render a template to HTML
///
/// The body goes to stdout unless an output file is given.
pub fn run(args: RenderArgs, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template(&args.id)?;
    let values = ctx.values(&template, args.data.as_deref())?;

    let body = TemplateEngine::new().render(&template.preview_html, &values);
    let html = if args.document {
        wrap_document(&template.name, &body, &ctx.config.document)
    } else {
        body
    };

    match args.output {
        Some(path) => {
            write_file(&path, &html)?;
            println!(
                "{} Rendered '{}' to {}",
                "✓".green().bold(),
                template.id,
                path.display()
            );
        }
        None => print_text(&html)?,
    }

    Ok(())
}
