//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formdoc")]
#[command(version, about = "Fill pt-BR document templates from form data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: nearest formdoc.toml)
    #[arg(long, global = true, env = "FORMDOC_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available templates
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show the fields of a template
    Show {
        /// Template id
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the initial value map of a template
    Data {
        /// Template id
        id: String,
    },

    /// Render a template to HTML
    Render {
        /// Template id
        id: String,

        /// JSON value map (default: initial values)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the body in a standalone printable page
        #[arg(long)]
        document: bool,
    },

    /// Export a template as a Word-compatible .doc file
    Export {
        /// Template id
        id: String,

        /// JSON value map (default: initial values)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output file (default: <id>.doc)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a template JSON file
    Check {
        /// Template file
        file: PathBuf,
    },

    /// Print a starter template
    Skeleton,

    /// Apply input masking to a text field value
    Mask {
        /// Field id (e.g. "representante_cpf", "valor_total")
        field: String,

        /// Raw value as typed
        value: String,
    },

    /// Create formdoc.toml and a templates/ directory here
    Init,
}
