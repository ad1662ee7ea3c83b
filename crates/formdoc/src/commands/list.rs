//! List command - templates known to the repository

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use formdoc_core::repository::TemplateRepository;
use formdoc_core::template::Template;
use std::path::PathBuf;

pub fn run(json: bool, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let templates = ctx.repository.list();

    if json {
        output_templates_json(templates)?;
    } else {
        output_templates_human(templates, ctx.verbose);
    }

    Ok(())
}

/// Output templates in JSON format
fn output_templates_json(templates: &[Template]) -> Result<()> {
    use serde_json::json;

    let templates_json: Vec<_> = templates
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "name": t.name,
                "fields": t.fields.len(),
            })
        })
        .collect();

    let output = json!({
        "templates": templates_json,
        "count": templates.len(),
    });

    print_json(&serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

/// Output templates in human-readable format
fn output_templates_human(templates: &[Template], verbose: bool) {
    if templates.is_empty() {
        println!("{} No templates available", "!".yellow());
        println!("\n{} Add *.json templates to the directory set in formdoc.toml", "→".cyan());
        return;
    }

    println!("{} Templates:", "→".cyan());
    println!();

    for template in templates {
        println!("  {} {}", "•".cyan(), template.id);
        println!("    {}", template.name);
        if verbose {
            println!("    {} field(s)", template.fields.len());
        }
    }
}
