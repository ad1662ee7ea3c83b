//! Show command - field declarations of a template

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use formdoc_core::template::{FieldDeclaration, Template};
use std::path::PathBuf;

pub fn run(id: String, json: bool, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template(&id)?;

    if json {
        let output = serde_json::json!({
            "id": template.id,
            "name": template.name,
            "fields": template.fields,
        });
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        output_fields_human(&template);
    }

    Ok(())
}

fn output_fields_human(template: &Template) {
    println!("{} {} ({})", "→".cyan(), template.name.bold(), template.id);
    println!();

    if template.fields.is_empty() {
        println!("  {} No fields", "!".yellow());
        return;
    }

    for field in &template.fields {
        println!(
            "  {} {} [{}] {}",
            "•".cyan(),
            field.id,
            field.kind.as_str(),
            field.label
        );
        print_choices(field);
    }
}

fn print_choices(field: &FieldDeclaration) {
    for option in &field.options {
        println!("      - {} = {}", option.label, option.value);
    }
    for item in &field.items {
        println!("      - {} ({})", item.id, item.label);
    }
}
