//! Data command - initial value map of a template

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use formdoc_core::template::create_initial_data;
use std::path::PathBuf;

pub fn run(id: String, config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let template = ctx.template(&id)?;

    let values = create_initial_data(Some(&template));
    print_json(&serde_json::to_string_pretty(&values)?)?;
    Ok(())
}
