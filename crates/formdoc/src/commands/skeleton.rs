//! Skeleton command - starter template for authors

use crate::output::print_json;
use anyhow::Result;
use formdoc_core::template::Template;

pub fn run() -> Result<()> {
    print_json(&serde_json::to_string_pretty(&Template::skeleton())?)?;
    Ok(())
}
