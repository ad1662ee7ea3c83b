mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use commands::render::RenderArgs;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config;
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json, config, verbose),
        Commands::Show { id, json } => commands::show::run(id, json, config, verbose),
        Commands::Data { id } => commands::data::run(id, config, verbose),
        Commands::Render {
            id,
            data,
            output,
            document,
        } => commands::render::run(
            RenderArgs {
                id,
                data,
                output,
                document,
            },
            config,
            verbose,
        ),
        Commands::Export { id, data, output } => {
            commands::export::run(id, data, output, config, verbose)
        }
        Commands::Check { file } => commands::check::run(file, verbose),
        Commands::Skeleton => commands::skeleton::run(),
        Commands::Mask { field, value } => commands::mask::run(field, value),
        Commands::Init => commands::init::run(verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
